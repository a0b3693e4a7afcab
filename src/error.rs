//! Error types for the setup pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Every way a setup run can fail.
///
/// None of these are recovered inside the library; the binary logs the
/// error and exits non-zero.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The OS has no entry in the platform table
    #[error("unsupported OS: {os}")]
    UnsupportedPlatform { os: String },

    /// The OS is known but the architecture is not
    #[error("unsupported architecture: {arch} for OS: {os}")]
    UnsupportedArchitecture { os: String, arch: String },

    /// Transport-level failure of the GET (DNS, connect, TLS, body read)
    #[error("failed to download {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with a success status
    #[error("download of {url} failed with HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The downloaded file is not a readable zip archive
    #[error("failed to read zip archive {}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// An archive entry would land outside the destination directory
    #[error("refusing to extract entry with unsafe path: {name}")]
    UnsafeEntryPath { name: String },

    /// Filesystem failure, tagged with what we were doing and where
    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be read or parsed
    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl SetupError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SetupError>;
