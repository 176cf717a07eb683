// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client construction.

use crate::error::Result;

/// Default user agent; GitHub rejects API requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("appshots/", env!("CARGO_PKG_VERSION"));

/// Builds the client used for both directory listings and image downloads.
pub fn build_client(user_agent: &str) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}
