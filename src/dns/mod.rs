//! DNS policy resolution and application.
//!
//! This module provides:
//! - Resolving the DNS servers for an (adapter, identity) pair ([`resolve`], [`DnsPolicy`])
//! - Applying a policy to an adapter ([`DnsApplier`], [`ApplyError`])
//! - The `netsh` backed applier ([`NetshApplier`])

mod applier;
mod netsh;
mod policy;

pub use applier::{ApplyError, DnsApplier};
pub use netsh::NetshApplier;
pub use policy::{DEFAULT_IDENTITY, DnsPolicy, resolve};
