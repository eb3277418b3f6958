//! The DNS policy document.
//!
//! Defines the structure of the configuration file with serde and the
//! post-parse normalization applied to it.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::ConfigError;
use super::defaults;

/// Rules for one adapter: network identity (or `"default"`) to ordered DNS servers.
pub type AdapterRules = HashMap<String, Vec<String>>;

/// Policy table: adapter name to its [`AdapterRules`].
///
/// Adapter names and identities are matched case-sensitively. DNS server
/// addresses are kept as opaque strings in their configured order.
pub type Settings = HashMap<String, AdapterRules>;

/// Raw document as it appears on disk.
///
/// Field names are also accepted in PascalCase; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    /// Milliseconds between poll cycles
    #[serde(default, alias = "Interval")]
    interval: Option<u64>,

    /// Adapter to identity to DNS list table
    #[serde(default, alias = "Settings")]
    settings: Option<Settings>,
}

/// A loaded configuration.
///
/// # Construction
///
/// Use [`Config::load`] or [`Config::parse`] for documents, or
/// [`Config::new`] plus [`Config::with_rule`] to build one in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    interval: Duration,
    settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(defaults::interval(), Settings::new())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ interval: {}ms, adapters: {}, rules: {} }}",
            self.interval.as_millis(),
            self.settings.len(),
            self.rule_count(),
        )
    }
}

impl Config {
    /// Creates a configuration from already-validated parts.
    #[must_use]
    pub const fn new(interval: Duration, settings: Settings) -> Self {
        Self { interval, settings }
    }

    /// Adds (or replaces) a single rule, returning the updated config.
    #[must_use]
    pub fn with_rule(mut self, adapter: &str, identity: &str, servers: &[&str]) -> Self {
        self.settings.entry(adapter.to_string()).or_default().insert(
            identity.to_string(),
            servers.iter().map(ToString::to_string).collect(),
        );
        self
    }

    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist,
    /// [`ConfigError::FileRead`] if it cannot be read, and
    /// [`ConfigError::JsonParse`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a JSON string.
    ///
    /// A missing `interval` falls back to the default, as does an interval
    /// of zero (with a warning). A missing or `null` `settings` is an empty
    /// table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::JsonParse`] if the document is not a JSON
    /// object of the expected shape.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        // Derived struct deserializers also accept sequences; only objects are documents.
        let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
        let raw: RawConfig = serde_json::from_value(serde_json::Value::Object(document))?;

        let interval = match raw.interval {
            None => defaults::interval(),
            Some(0) => {
                tracing::warn!(
                    "Config interval of 0ms is not usable, using {}ms",
                    defaults::INTERVAL_MS
                );
                defaults::interval()
            }
            Some(ms) => Duration::from_millis(ms),
        };

        Ok(Self::new(interval, raw.settings.unwrap_or_default()))
    }

    /// Returns the time to sleep between poll cycles.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the full policy table.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the rules configured for `adapter`, if any.
    #[must_use]
    pub fn adapter_rules(&self, adapter: &str) -> Option<&AdapterRules> {
        self.settings.get(adapter)
    }

    /// Returns the total number of identity rules across all adapters.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.settings.values().map(HashMap::len).sum()
    }
}
