// SPDX-License-Identifier: MPL-2.0
//! Listing pipeline: fetches every directory and resolves display items.
//!
//! The optimized listing and the three platform listings run concurrently and
//! are joined before anything is rendered. A failed optimized listing only
//! disables the optimized variants; a failed platform listing only empties
//! that platform.

use crate::error::ListingError;
use crate::gallery::{self, build_items, DisplayItem, OptimizedAssetIndex};
use crate::listing::DirectoryLister;
use crate::platform::{Platform, PlatformDescriptor, PLATFORMS};
use futures_util::future;
use tracing::{info, warn};

/// Resolved items of one platform.
#[derive(Debug, Clone)]
pub struct PlatformCollection {
    pub platform: Platform,
    pub items: Vec<DisplayItem>,
    /// Why the listing failed, when it did. `items` is empty then.
    pub failure: Option<ListingError>,
}

/// Outcome of one full pipeline run, in [`PLATFORMS`] order.
#[derive(Debug, Clone)]
pub struct Collections {
    platforms: Vec<PlatformCollection>,
    optimized_count: usize,
}

impl Collections {
    /// Items of `platform`; empty when it has none or its listing failed.
    #[must_use]
    pub fn items(&self, platform: Platform) -> &[DisplayItem] {
        self.get(platform).map_or(&[], |collection| &collection.items)
    }

    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&PlatformCollection> {
        self.platforms
            .iter()
            .find(|collection| collection.platform == platform)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlatformCollection> {
        self.platforms.iter()
    }

    /// Number of optimized variants known to this run.
    #[must_use]
    pub fn optimized_count(&self) -> usize {
        self.optimized_count
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.platforms.iter().map(|c| c.items.len()).sum()
    }
}

/// Runs the whole listing pipeline against `lister`.
pub async fn load_collections<L: DirectoryLister>(lister: &L) -> Collections {
    let web_path = gallery::web_listing_path();
    let [tvos, macos, ios] = PLATFORMS;

    let (web, tvos_files, macos_files, ios_files) = future::join4(
        lister.list(&web_path),
        list_platform(lister, &tvos),
        list_platform(lister, &macos),
        list_platform(lister, &ios),
    )
    .await;

    let optimized = OptimizedAssetIndex::from_best_effort(web);

    let platforms: Vec<PlatformCollection> = [
        (tvos, tvos_files),
        (macos, macos_files),
        (ios, ios_files),
    ]
    .into_iter()
    .map(|(descriptor, listing)| resolve_platform(&descriptor, listing, &optimized))
    .collect();

    let collections = Collections {
        platforms,
        optimized_count: optimized.len(),
    };
    info!(
        items = collections.total_items(),
        optimized = collections.optimized_count(),
        "screenshot collections resolved"
    );
    collections
}

async fn list_platform<L: DirectoryLister>(
    lister: &L,
    descriptor: &PlatformDescriptor,
) -> Result<Vec<String>, ListingError> {
    lister
        .list(&gallery::platform_listing_path(descriptor.folder_name))
        .await
}

fn resolve_platform(
    descriptor: &PlatformDescriptor,
    listing: Result<Vec<String>, ListingError>,
    optimized: &OptimizedAssetIndex,
) -> PlatformCollection {
    match listing {
        Ok(names) => PlatformCollection {
            platform: descriptor.key,
            items: build_items(descriptor.folder_name, descriptor.label, &names, optimized),
            failure: None,
        },
        Err(err) => {
            warn!(platform = %descriptor.key, error = %err, "platform listing failed");
            PlatformCollection {
                platform: descriptor.key,
                items: Vec::new(),
                failure: Some(err),
            }
        }
    }
}
