// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the fxpeek pipeline
//!
//! Per-include failures inside the inliner are contained and rewritten into
//! diagnostic comments; these types carry the context for those comments
//! and for the few operations that can fail at the crate boundary.

use thiserror::Error;

/// Result type alias for fxpeek operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fxpeek pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing or resolution failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// I/O error (local include files, CLI input)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Include content could not be fetched
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Fetch refused: the location's scheme is not handled
    #[error("Unsupported scheme '{scheme}' for {url}")]
    UnsupportedScheme { url: String, scheme: String },

    /// Include graph revisits a location already entered in this descent
    #[error("Include cycle detected at {url}")]
    IncludeCycle { url: String },

    /// Included content exceeds the configured size cap
    #[error("Include too large: {url} ({size} bytes, limit {limit})")]
    TooLarge { url: String, size: u64, limit: u64 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a fetch error with URL context
    pub fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Fetch {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create an unsupported-scheme error
    pub fn unsupported_scheme(url: impl Into<String>, scheme: impl Into<String>) -> Self {
        Error::UnsupportedScheme {
            url: url.into(),
            scheme: scheme.into(),
        }
    }

    /// Create an include-cycle error
    pub fn cycle(url: impl Into<String>) -> Self {
        Error::IncludeCycle { url: url.into() }
    }

    /// Create a size-cap error
    pub fn too_large(url: impl Into<String>, size: u64, limit: u64) -> Self {
        Error::TooLarge {
            url: url.into(),
            size,
            limit,
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a cycle detection
    pub fn is_cycle(&self) -> bool {
        matches!(self, Error::IncludeCycle { .. })
    }

    /// Check if this is a fetch-side failure (transport or refusal)
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Error::Fetch { .. }
                | Error::Http(_)
                | Error::UnsupportedScheme { .. }
                | Error::TooLarge { .. }
        )
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Fetch { url, .. } => Some(url),
            Error::UnsupportedScheme { url, .. } => Some(url),
            Error::IncludeCycle { url } => Some(url),
            Error::TooLarge { url, .. } => Some(url),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error() {
        let err = Error::fetch("file:/a/b/missing.fxml", "not found");

        assert!(err.is_fetch());
        assert!(!err.is_cycle());
        assert_eq!(err.url(), Some("file:/a/b/missing.fxml"));
    }

    #[test]
    fn test_cycle_error() {
        let err = Error::cycle("file:/a/b/loop.fxml");

        assert!(err.is_cycle());
        assert!(!err.is_fetch());
        assert_eq!(err.url(), Some("file:/a/b/loop.fxml"));
    }

    #[test]
    fn test_too_large() {
        let err = Error::too_large("file:/big.fxml", 2_000_000, 1_000_000);

        assert!(err.is_fetch());
        assert!(err.to_string().contains("limit 1000000"));
    }
}
