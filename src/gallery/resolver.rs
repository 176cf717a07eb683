// SPDX-License-Identifier: MPL-2.0
//! Turns a platform's raw filenames into ordered display items.

use super::{DisplayItem, OptimizedAssetIndex, ASSET_ROOT, WEB_DIR};
use crate::media::extensions::OPTIMIZED_EXTENSION;
use crate::media::{derive_base_name, is_displayable_image, sort_natural};

/// Name of the optimized variant for `name` in `folder_name`.
#[must_use]
pub fn optimized_name(folder_name: &str, name: &str) -> String {
    format!(
        "{folder_name}-{}.{OPTIMIZED_EXTENSION}",
        derive_base_name(name)
    )
}

/// Builds the display items of one platform.
///
/// Non-image and hidden files are dropped, the rest are naturally ordered.
/// Each item prefers its optimized variant when `optimized` knows it.
pub fn build_items<S: AsRef<str>>(
    folder_name: &str,
    label: &str,
    filenames: &[S],
    optimized: &OptimizedAssetIndex,
) -> Vec<DisplayItem> {
    let displayable: Vec<&str> = filenames
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| is_displayable_image(name))
        .collect();

    sort_natural(&displayable)
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let fallback_src = format!("{ASSET_ROOT}/{folder_name}/{name}");
            let variant = optimized_name(folder_name, &name);
            let primary_src = if optimized.contains(&variant) {
                format!("{ASSET_ROOT}/{WEB_DIR}/{variant}")
            } else {
                fallback_src.clone()
            };

            DisplayItem {
                primary_src,
                fallback_src,
                alt_text: format!("{label} screenshot {}", index + 1),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: [&str; 4] = ["b.png", "a.png", ".hidden.png", "readme.txt"];

    #[test]
    fn filters_and_orders_without_optimized_assets() {
        let items = build_items("tvOS", "tvOS", &LISTING, &OptimizedAssetIndex::default());

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].fallback_src, "AppImages/tvOS/a.png");
        assert_eq!(items[1].fallback_src, "AppImages/tvOS/b.png");
        assert!(items.iter().all(|item| item.primary_src == item.fallback_src));
    }

    #[test]
    fn optimized_variant_becomes_primary() {
        let index = OptimizedAssetIndex::from_names(["tvOS-a.webp"]);
        let items = build_items("tvOS", "tvOS", &LISTING, &index);

        assert!(items[0].primary_src.ends_with("AppImages/web/tvOS-a.webp"));
        assert_eq!(items[0].fallback_src, "AppImages/tvOS/a.png");
        assert!(items[0].has_optimized_variant());
        assert!(!items[1].has_optimized_variant());
    }

    #[test]
    fn alt_text_counts_from_one_in_display_order() {
        let items = build_items("iOS", "iOS", &["10.png", "2.png"], &OptimizedAssetIndex::default());
        assert_eq!(items[0].alt_text, "iOS screenshot 1");
        assert_eq!(items[0].fallback_src, "AppImages/iOS/2.png");
        assert_eq!(items[1].alt_text, "iOS screenshot 2");
    }

    #[test]
    fn variants_of_other_platforms_are_not_matched() {
        let index = OptimizedAssetIndex::from_names(["macOS-a.webp"]);
        let items = build_items("tvOS", "tvOS", &["a.png"], &index);
        assert_eq!(items[0].primary_src, items[0].fallback_src);
    }

    #[test]
    fn empty_listing_yields_no_items() {
        let items = build_items::<&str>("tvOS", "tvOS", &[], &OptimizedAssetIndex::default());
        assert!(items.is_empty());
    }

    #[test]
    fn optimized_name_replaces_only_last_extension() {
        assert_eq!(optimized_name("macOS", "shot.v2.PNG"), "macOS-shot.v2.webp");
    }
}
