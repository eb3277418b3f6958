//! Per-network DNS policy resolution.

use std::fmt;

use crate::config::Config;

/// Identity key used when no rule matches the adapter's current identity.
pub const DEFAULT_IDENTITY: &str = "default";

/// Resolves the ordered DNS servers for `adapter` on network `identity`.
///
/// # Resolution Order
///
/// 1. No rules for `adapter`: empty
/// 2. Exact rule for `identity`: that list, even if empty
/// 3. A [`DEFAULT_IDENTITY`] rule: that list
/// 4. Otherwise: empty
///
/// An empty result means "obtain DNS automatically", not an error.
#[must_use]
pub fn resolve<'a>(adapter: &str, identity: &str, config: &'a Config) -> &'a [String] {
    let Some(rules) = config.adapter_rules(adapter) else {
        return &[];
    };

    rules
        .get(identity)
        .or_else(|| rules.get(DEFAULT_IDENTITY))
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// What to do with an adapter's DNS configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsPolicy {
    /// Obtain DNS servers automatically (DHCP).
    Automatic,
    /// Use exactly these servers, in priority order. Never empty.
    Static(Vec<String>),
}

impl DnsPolicy {
    /// Resolves and wraps the policy for an (adapter, identity) pair.
    #[must_use]
    pub fn for_adapter(adapter: &str, identity: &str, config: &Config) -> Self {
        Self::from_servers(resolve(adapter, identity, config))
    }

    /// Builds a policy from a resolved server list.
    #[must_use]
    pub fn from_servers(servers: &[String]) -> Self {
        if servers.is_empty() {
            Self::Automatic
        } else {
            Self::Static(servers.to_vec())
        }
    }

    /// Returns true if this is [`DnsPolicy::Automatic`].
    #[must_use]
    pub const fn is_automatic(&self) -> bool {
        matches!(self, Self::Automatic)
    }

    /// Returns the static servers, or an empty slice for automatic DNS.
    #[must_use]
    pub fn servers(&self) -> &[String] {
        match self {
            Self::Automatic => &[],
            Self::Static(servers) => servers.as_slice(),
        }
    }
}

impl fmt::Display for DnsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automatic => write!(f, "DHCP"),
            Self::Static(servers) => write!(f, "[{}]", servers.join(", ")),
        }
    }
}
