//! Configuration layer for wlan-dns.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - The per-network DNS policy document ([`Config`], [`Settings`])
//! - Config sources that are re-read every poll cycle ([`ConfigSource`], [`FileConfigSource`])
//! - Default values ([`defaults`])
//!
//! # Reload Semantics
//!
//! The configuration file is read again at the start of every poll cycle,
//! so edits take effect without restarting the process. A document that
//! fails to load in one cycle causes that cycle to take no DNS action; the
//! previously loaded interval is only used to decide how long to sleep.
//!
//! # Document Shape
//!
//! ```json
//! {
//!   "interval": 30000,
//!   "settings": {
//!     "Wi-Fi": {
//!       "aa:bb:cc:dd:ee:ff": ["1.1.1.1", "8.8.8.8"],
//!       "default": []
//!     }
//!   }
//! }
//! ```

mod cli;
pub mod defaults;
mod document;
mod error;
mod source;


pub use cli::Cli;
pub use document::{AdapterRules, Config, Settings};
pub use error::ConfigError;
pub use source::{ConfigSource, FileConfigSource};
