//! Per-adapter change tracking.

use std::collections::HashMap;

/// Remembers the identity each adapter was last processed for.
///
/// Lives for the lifetime of the poll loop and is never persisted, so the
/// first cycle after a restart always processes every connected adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeTracker {
    last_seen: HashMap<String, String>,
}

impl ChangeTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `adapter` has never been recorded or was recorded
    /// for a different identity.
    #[must_use]
    pub fn should_process(&self, adapter: &str, identity: &str) -> bool {
        self.last_seen
            .get(adapter)
            .is_none_or(|previous| previous != identity)
    }

    /// Records `identity` as the last processed identity for `adapter`.
    pub fn record(&mut self, adapter: &str, identity: &str) {
        self.last_seen
            .insert(adapter.to_string(), identity.to_string());
    }

    /// Returns the last recorded identity for `adapter`.
    #[must_use]
    pub fn last_identity(&self, adapter: &str) -> Option<&str> {
        self.last_seen.get(adapter).map(String::as_str)
    }

    /// Returns the number of adapters tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.last_seen.len()
    }

    /// Returns true if no adapter has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_seen.is_empty()
    }
}
