//! Operating system integration.
//!
//! This module provides:
//! - Running `netsh` for both probing and applying ([`CommandRunner`], [`NetshRunner`])
//! - The administrator check performed at startup ([`ensure_elevated`])
//!
//! # Platform Support
//!
//! - **Windows**: `netsh.exe` and the process token elevation flag.
//! - **Other platforms**: compiles so the core can be tested anywhere, but
//!   the privilege check reports the platform as unsupported.

mod netsh;
mod privilege;

pub use netsh::{CommandRunner, NetshError, NetshRunner};
pub use privilege::{PrivilegeError, ensure_elevated};
