//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default configuration file path, relative to the working directory.
pub const CONFIG_PATH: &str = "config.json";

/// Default polling interval in milliseconds.
pub const INTERVAL_MS: u64 = 30_000;

/// Sleep used between cycles while no configuration has ever loaded.
pub const FALLBACK_SLEEP_MS: u64 = 5_000;

/// Default polling interval as Duration.
#[must_use]
pub const fn interval() -> Duration {
    Duration::from_millis(INTERVAL_MS)
}

/// Fallback sleep as Duration.
#[must_use]
pub const fn fallback_sleep() -> Duration {
    Duration::from_millis(FALLBACK_SLEEP_MS)
}
