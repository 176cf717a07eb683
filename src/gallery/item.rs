// SPDX-License-Identifier: MPL-2.0
//! A single resolved screenshot.

/// Render-ready description of one screenshot.
///
/// `fallback_src` always points at the original asset. `primary_src` is the
/// optimized variant when one exists and equals `fallback_src` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub primary_src: String,
    pub fallback_src: String,
    pub alt_text: String,
}

impl DisplayItem {
    #[must_use]
    pub fn has_optimized_variant(&self) -> bool {
        self.primary_src != self.fallback_src
    }
}
