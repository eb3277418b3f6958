//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::Parser;

use super::defaults;

/// wlan-dns: per-network DNS switching
///
/// Watches which wireless network each adapter is associated with and
/// applies the DNS servers configured for that network.
#[derive(Debug, Parser)]
#[command(name = "wlan-dns")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(value_name = "CONFIG", default_value = defaults::CONFIG_PATH)]
    pub config: PathBuf,

    /// Log the DNS changes that would be made without applying them
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Run a single poll cycle and exit
    #[arg(long)]
    pub once: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    ///
    /// # Errors
    ///
    /// Returns the clap error for usage problems (including more than one
    /// positional argument) and for `--help`/`--version` requests.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Same as [`Cli::try_parse_args`].
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}
