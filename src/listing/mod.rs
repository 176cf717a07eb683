// SPDX-License-Identifier: MPL-2.0
//! Remote directory listing.
//!
//! A [`DirectoryLister`] returns the names of the regular files found under a
//! logical path (`AppImages/tvOS`, `AppImages/web`...). The production
//! implementation talks to the GitHub contents API; tests substitute an
//! in-memory lister.

pub mod github;

pub use github::{parse_listing, GitHubLister};

use crate::error::ListingError;
use std::future::Future;

/// Source of remote directory listings.
pub trait DirectoryLister {
    /// Lists the regular files directly under `path`.
    ///
    /// Issues a single request. A non-success answer is a
    /// [`ListingError::Status`]; directories, symlinks and nameless entries
    /// are dropped from a successful answer.
    fn list(&self, path: &str) -> impl Future<Output = Result<Vec<String>, ListingError>> + Send;
}
