// SPDX-License-Identifier: MPL-2.0
//! Index of pre-generated optimized screenshot variants.

use crate::error::ListingError;
use crate::media::extensions::OPTIMIZED_EXTENSION;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Flat set of optimized filenames (`{folder}-{base}.webp`) shared by every
/// platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizedAssetIndex {
    names: HashSet<String>,
}

impl OptimizedAssetIndex {
    /// Builds the index from a raw listing, keeping only `.webp` entries.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| has_optimized_extension(name))
            .collect();
        Self { names }
    }

    /// Collapses the outcome of the optimized listing into an index.
    ///
    /// Optimized variants are optional, so a failed listing yields an empty
    /// index and every item falls back to its original.
    pub fn from_best_effort(listing: Result<Vec<String>, ListingError>) -> Self {
        match listing {
            Ok(names) => {
                let index = Self::from_names(names);
                debug!(count = index.len(), "optimized asset index built");
                index
            }
            Err(err) => {
                warn!(error = %err, "optimized asset listing unavailable, using originals");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn has_optimized_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(OPTIMIZED_EXTENSION))
}
