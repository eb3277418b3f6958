//! Network identity probing trait and error types.

use super::AdapterIdentity;
use crate::platform::NetshError;
use thiserror::Error;

/// Error type for probing operations.
///
/// Describes what went wrong without dictating recovery strategy.
/// The poll loop skips the current cycle on any of these.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The status command could not be run or reported failure.
    #[error("Failed to query wireless interfaces: {0}")]
    Command(#[from] NetshError),
}

/// Trait for discovering the current network identity of every adapter.
///
/// # Design
///
/// - The real implementation shells out to `netsh`
/// - Enables dependency injection for testing with scripted snapshots
///
/// # Example
///
/// ```
/// use wlan_dns::network::{AdapterIdentity, NetworkProbe, ProbeError};
///
/// struct Fixed(Vec<AdapterIdentity>);
///
/// impl NetworkProbe for Fixed {
///     fn snapshot(&self) -> Result<Vec<AdapterIdentity>, ProbeError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let probe = Fixed(vec![AdapterIdentity::new("Wi-Fi", "aa:bb:cc:dd:ee:ff")]);
/// assert_eq!(probe.snapshot().unwrap().len(), 1);
/// ```
pub trait NetworkProbe: Send + Sync {
    /// Returns the current (adapter, identity) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when the underlying query fails. An adapter
    /// that is simply not connected is not an error; it is left out.
    fn snapshot(&self) -> Result<Vec<AdapterIdentity>, ProbeError>;
}
