//! wlan-dns: per-network DNS switching
//!
//! Entry point for the wlan-dns application.

use std::process::ExitCode;

use clap::error::ErrorKind;
use wlan_dns::config::Cli;
use wlan_dns::platform::ensure_elevated;

mod app;
mod run;

use app::{exit_code, setup_tracing};
use run::RuntimeOptions;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(&e),
    };

    setup_tracing(cli.verbose);

    // Probing works unprivileged, so dry runs skip the check.
    if !cli.dry_run {
        if let Err(e) = ensure_elevated() {
            eprintln!("{e}");
            return exit_code::not_elevated();
        }
    }

    run_application(RuntimeOptions::from(&cli))
}

/// Prints a clap error and maps it to an exit code.
fn handle_parse_error(error: &clap::Error) -> ExitCode {
    let _ = error.print();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_code::SUCCESS,
        _ => exit_code::usage_error(),
    }
}

/// Runs the main application with the given options.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(options: RuntimeOptions) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(options)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::for_run_error(&e)
        }
    }
}
