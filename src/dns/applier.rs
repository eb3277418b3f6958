//! DNS application trait and error types.

use thiserror::Error;

use super::DnsPolicy;
use crate::platform::NetshError;

/// Error type for applying DNS settings to one adapter.
///
/// Failures are scoped to a single adapter; the poll loop logs them and
/// carries on with the next adapter.
#[derive(Debug, Error)]
pub enum ApplyError {
    /// A configuration command failed.
    #[error("Failed to set DNS for adapter '{adapter}': {source}")]
    Command {
        /// Adapter being configured
        adapter: String,
        /// Underlying command failure
        #[source]
        source: NetshError,
    },
}

impl ApplyError {
    /// Returns the adapter the failure belongs to.
    #[must_use]
    pub fn adapter(&self) -> &str {
        match self {
            Self::Command { adapter, .. } => adapter,
        }
    }
}

/// Trait for changing an adapter's DNS servers.
///
/// Both operations are idempotent and scoped to the named adapter.
pub trait DnsApplier: Send + Sync {
    /// Configures `adapter` to obtain DNS servers automatically (DHCP).
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError`] if the change could not be made.
    fn set_automatic(&self, adapter: &str) -> Result<(), ApplyError>;

    /// Replaces all static DNS servers on `adapter` with `servers`, where
    /// the first entry has the highest priority.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError`] if any part of the change could not be made.
    fn set_static(&self, adapter: &str, servers: &[String]) -> Result<(), ApplyError>;

    /// Applies `policy`, dispatching to [`Self::set_automatic`] or [`Self::set_static`].
    ///
    /// # Errors
    ///
    /// Propagates the error of the dispatched operation.
    fn apply(&self, adapter: &str, policy: &DnsPolicy) -> Result<(), ApplyError> {
        match policy {
            DnsPolicy::Automatic => self.set_automatic(adapter),
            DnsPolicy::Static(servers) => self.set_static(adapter, servers),
        }
    }
}
