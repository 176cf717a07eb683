// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! Every error is `Clone` so it can travel inside Iced messages.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Listing Error: {0}")]
    Listing(#[from] ListingError),
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Image Error: {0}")]
    Image(String),
    #[error("Invalid asset location: {0}")]
    Url(String),
}

/// Failure to list one remote directory.
///
/// Always carries the logical path that was requested so the caller can tell
/// which platform (or the optimized-asset directory) is affected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// The listing service answered with a non-success status.
    #[error("failed to list {path}: HTTP {status}")]
    Status { path: String, status: u16 },

    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("failed to list {path}: {reason}")]
    Transport { path: String, reason: String },

    /// The response body was not JSON at all.
    #[error("failed to list {path}: malformed response: {reason}")]
    Decode { path: String, reason: String },
}

impl ListingError {
    /// Logical path of the listing that failed.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            ListingError::Status { path, .. }
            | ListingError::Transport { path, .. }
            | ListingError::Decode { path, .. } => path,
        }
    }

    /// HTTP status, when the service answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ListingError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Url(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn listing_status_error_carries_path_and_status() {
        let err = ListingError::Status {
            path: "AppImages/iOS".to_string(),
            status: 404,
        };
        assert_eq!(err.path(), "AppImages/iOS");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "failed to list AppImages/iOS: HTTP 404");
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = ListingError::Transport {
            path: "AppImages/web".to_string(),
            reason: "connection reset".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn listing_error_converts_into_crate_error() {
        let err: Error = ListingError::Decode {
            path: "AppImages/tvOS".to_string(),
            reason: "expected value".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Listing(_)));
    }
}
