//! Application startup and utilities.
//!
//! This module contains exit codes and tracing setup that support the
//! main entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    use wlan_dns::monitor::CycleError;

    use crate::run::RunError;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Numeric value of [`runtime_error`].
    pub const RUNTIME_ERROR: u8 = 2;

    /// Numeric value of [`not_elevated`].
    pub const NOT_ELEVATED: u8 = 11;

    /// Numeric value of [`usage_error`].
    pub const USAGE_ERROR: u8 = 12;

    /// Config file missing or malformed, `--once` only.
    pub const CONFIG_ERROR: u8 = 13;

    // These are functions rather than constants because `ExitCode::from()` is not `const fn`.

    /// Runtime error (exit code 2) - probe failure, runtime construction failure.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(RUNTIME_ERROR)
    }

    /// Not running as administrator (exit code 11).
    pub fn not_elevated() -> ExitCode {
        ExitCode::from(NOT_ELEVATED)
    }

    /// Invalid command line, e.g. more than one config path (exit code 12).
    pub fn usage_error() -> ExitCode {
        ExitCode::from(USAGE_ERROR)
    }

    /// Returns the numeric exit code for a failed run.
    pub const fn code_for(error: &RunError) -> u8 {
        match error {
            RunError::Cycle(CycleError::Config(_)) => CONFIG_ERROR,
            RunError::Cycle(CycleError::Probe(_)) => RUNTIME_ERROR,
        }
    }

    /// Maps a failed run to its exit code.
    pub fn for_run_error(error: &RunError) -> ExitCode {
        ExitCode::from(code_for(error))
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
