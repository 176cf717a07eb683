// SPDX-License-Identifier: MPL-2.0
//! Download of screenshot assets.
//!
//! Display items carry paths relative to the published site
//! (`AppImages/tvOS/1.png`). [`AssetClient`] resolves them against a base URL
//! the same way a browser resolves a relative `src`, downloads them and
//! decodes them off the UI thread.

use super::image::{decode_image, ImageData};
use crate::error::{Error, Result};
use tracing::debug;
use url::Url;

#[derive(Debug, Clone)]
pub struct AssetClient {
    http: reqwest::Client,
    base: Url,
}

impl AssetClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base: Url) -> Self {
        Self { http, base }
    }

    /// Absolute URL of a relative asset path.
    pub fn resolve(&self, src: &str) -> Result<Url> {
        Ok(self.base.join(src)?)
    }

    /// Downloads and decodes the asset at `src`.
    ///
    /// A non-success status, a transport failure and an undecodable payload
    /// are all reported as errors so the caller can fall back to another
    /// source.
    pub async fn fetch_image(&self, src: &str) -> Result<ImageData> {
        let url = self.resolve(src)?;
        debug!(%url, "fetching screenshot");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("HTTP {} for {}", status.as_u16(), url)));
        }

        let bytes = response.bytes().await?;
        tokio::task::spawn_blocking(move || decode_image(&bytes))
            .await
            .map_err(|err| Error::Image(err.to_string()))?
    }
}

/// Picks the base URL relative asset paths are resolved against.
///
/// Priority: an explicit base, then the page the collection is published on,
/// then the raw content of the repository's default branch.
pub fn resolve_asset_base(
    explicit: Option<&str>,
    page_url: Option<&Url>,
    owner: &str,
    repo: &str,
) -> Result<Url> {
    if let Some(explicit) = explicit {
        return Ok(Url::parse(&with_trailing_slash(explicit))?);
    }
    if let Some(page) = page_url {
        return Ok(page.clone());
    }
    let raw = format!("https://raw.githubusercontent.com/{owner}/{repo}/HEAD/");
    Ok(Url::parse(&raw)?)
}

fn with_trailing_slash(value: &str) -> String {
    if value.ends_with('/') {
        value.to_string()
    } else {
        format!("{value}/")
    }
}
