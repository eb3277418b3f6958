//! Config sources consulted once per poll cycle.

use std::path::{Path, PathBuf};

use super::{Config, ConfigError};

/// Something that can produce a fresh [`Config`] on demand.
///
/// # Design
///
/// - The poll loop calls [`ConfigSource::load`] at the start of every cycle
/// - Enables dependency injection for testing with scripted documents
pub trait ConfigSource: Send + Sync {
    /// Loads the current configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is missing or malformed.
    fn load(&self) -> Result<Config, ConfigError>;
}

/// Reads the configuration from a JSON file every time it is asked.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    /// Creates a source for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> Result<Config, ConfigError> {
        Config::load(&self.path)
    }
}
