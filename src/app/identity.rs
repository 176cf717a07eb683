// SPDX-License-Identifier: MPL-2.0
//! Which GitHub repository the screenshots are listed from.

use url::Url;

const PAGES_HOST_SUFFIX: &str = ".github.io";

/// Owner and repository the listings are requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostingIdentity {
    pub owner: String,
    pub repo: String,
}

/// Resolves the hosting identity.
///
/// Explicit owner/repo metadata wins when both are present and non-empty.
/// Otherwise the identity is read from a GitHub Pages URL: the owner is the
/// first host label, the repository is the first path segment, or
/// `{owner}.github.io` for a user site served at the root. Any other host
/// yields `None`.
#[must_use]
pub fn resolve(
    meta_owner: Option<&str>,
    meta_repo: Option<&str>,
    page_url: Option<&Url>,
) -> Option<HostingIdentity> {
    fn non_empty(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    if let (Some(owner), Some(repo)) = (non_empty(meta_owner), non_empty(meta_repo)) {
        return Some(HostingIdentity {
            owner: owner.to_string(),
            repo: repo.to_string(),
        });
    }

    let url = page_url?;
    let host = url.host_str()?;
    if !host.ends_with(PAGES_HOST_SUFFIX) {
        return None;
    }

    let owner = host.split('.').next().filter(|label| !label.is_empty())?;
    let repo = url
        .path_segments()
        .and_then(|mut segments| segments.find(|segment| !segment.is_empty()))
        .map_or_else(|| format!("{owner}{PAGES_HOST_SUFFIX}"), str::to_string);

    Some(HostingIdentity {
        owner: owner.to_string(),
        repo,
    })
}
