//! Error types for the poll loop.

use crate::config::ConfigError;
use crate::network::ProbeError;
use thiserror::Error;

/// A poll cycle that could not reach the per-adapter stage.
///
/// Per-adapter apply failures are not cycle errors; they are reported in
/// [`super::CycleReport`] alongside successful adapters.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The configuration could not be loaded; no DNS action was taken.
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),

    /// Current network identities could not be determined; no DNS action was taken.
    #[error("Failed to probe networks: {0}")]
    Probe(#[from] ProbeError),
}
