//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Every variant means the document could not be turned into a usable
/// [`super::Config`]; the poll loop treats them all alike and skips the cycle.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Couldn't find config file '{}'", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not have the expected shape.
    #[error("Malformed config: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Returns true if the file was missing rather than unreadable or malformed.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
