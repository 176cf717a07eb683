// SPDX-License-Identifier: MPL-2.0
//! GitHub contents API lister.

use super::DirectoryLister;
use crate::error::{ListingError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Media type advertised to the contents API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Default API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Lists repository directories through `GET /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone)]
pub struct GitHubLister {
    http: reqwest::Client,
    api_base: Url,
    owner: String,
    repo: String,
}

impl GitHubLister {
    pub fn new(http: reqwest::Client, api_base: &str, owner: &str, repo: &str) -> Result<Self> {
        Ok(Self {
            http,
            api_base: Url::parse(api_base)?,
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Full contents URL for a logical path.
    #[must_use]
    pub fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base.as_str().trim_end_matches('/'),
            self.owner,
            self.repo,
            path.trim_start_matches('/')
        )
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers
    }
}

impl DirectoryLister for GitHubLister {
    async fn list(&self, path: &str) -> std::result::Result<Vec<String>, ListingError> {
        let url = self.contents_url(path);
        debug!(%url, "listing directory");

        let response = self
            .http
            .get(&url)
            .headers(Self::headers())
            .send()
            .await
            .map_err(|err| ListingError::Transport {
                path: path.to_string(),
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListingError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|err| ListingError::Transport {
            path: path.to_string(),
            reason: err.to_string(),
        })?;

        parse_listing(path, &body)
    }
}

/// Extracts regular file names from a contents API body.
///
/// A body that is valid JSON but not an array lists nothing. Entries whose
/// `type` is not `"file"` or whose `name` is missing are skipped.
pub fn parse_listing(path: &str, body: &str) -> std::result::Result<Vec<String>, ListingError> {
    let value: Value = serde_json::from_str(body).map_err(|err| ListingError::Decode {
        path: path.to_string(),
        reason: err.to_string(),
    })?;

    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .filter(|entry| entry.get("type").and_then(Value::as_str) == Some("file"))
        .filter_map(|entry| entry.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect())
}
