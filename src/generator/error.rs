//! Error types for the generator module.
//!
//! Generation failures are fatal: the first unrecoverable sub-step aborts
//! the run, no retry is attempted, and partial output is left in place.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating an extension package.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The input URL does not parse as an absolute URL with a host.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The rejected input string.
        url: String,
    },

    /// The favicon service answered with a non-success status.
    #[error("favicon service returned HTTP {status} for {url}")]
    IconStatus {
        /// The favicon request URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Transport-level error while fetching an icon.
    #[error("network error fetching icon {url}: {source}")]
    IconNetwork {
        /// The favicon request URL.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// A template file could not be read.
    #[error("failed to read template {path}: {source}")]
    Template {
        /// The template file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest record failed to serialize.
    #[error("failed to encode manifest: {source}")]
    Manifest {
        /// The underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// File system error while writing an artifact.
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates a non-success favicon status error.
    pub fn icon_status(url: impl Into<String>, status: u16) -> Self {
        Self::IconStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates an icon transport error.
    pub fn icon_network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::IconNetwork {
            url: url.into(),
            source,
        }
    }

    /// Creates a template read error.
    pub fn template(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Template {
            path: path.into(),
            source,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// No blanket `From<reqwest::Error>` / `From<std::io::Error>` impls: every
// variant carries context (url, path) the source errors lack, so callers
// go through the helper constructors.
