//! Network layer for discovering which network each adapter is associated with.
//!
//! This module provides types and traits for:
//! - Representing one adapter's current association ([`AdapterIdentity`])
//! - Probing all adapters at once ([`NetworkProbe`], [`ProbeError`])
//! - Parsing `netsh wlan show interfaces` reports ([`parser`])
//! - The `netsh` backed probe ([`NetshProbe`])

mod identity;
mod netsh;
pub mod parser;
mod probe;

pub use identity::AdapterIdentity;
pub use netsh::NetshProbe;
pub use probe::{NetworkProbe, ProbeError};
