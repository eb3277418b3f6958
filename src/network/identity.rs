//! Adapter association type.

use std::fmt;

/// One adapter and the identity (BSSID) of the network it is associated with.
///
/// A probe yields one of these per connected adapter, in the order the
/// operating system reports them. Adapters that are not associated with any
/// network produce no entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdapterIdentity {
    /// The friendly name of the adapter (e.g., "Wi-Fi").
    pub adapter: String,
    /// The network identity token, as reported (e.g., "aa:bb:cc:dd:ee:ff").
    pub identity: String,
}

impl AdapterIdentity {
    /// Creates a new adapter identity pair.
    #[must_use]
    pub fn new(adapter: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            adapter: adapter.into(),
            identity: identity.into(),
        }
    }
}

impl fmt::Display for AdapterIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' on {}", self.adapter, self.identity)
    }
}
