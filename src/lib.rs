//! wlan-dns: per-network DNS switching
//!
//! A library for detecting which wireless network each adapter is
//! associated with and applying the DNS servers configured for it.

pub mod config;
pub mod dns;
pub mod monitor;
pub mod network;
pub mod platform;
