//! Application execution logic.
//!
//! This module wires the real config file, `netsh` probe and `netsh`
//! applier into a [`PollLoop`] and drives it until shutdown.

use std::path::PathBuf;

use thiserror::Error;
use tokio::signal;

use wlan_dns::config::{Cli, FileConfigSource};
use wlan_dns::dns::NetshApplier;
use wlan_dns::monitor::{CycleError, CycleReport, PollLoop};
use wlan_dns::network::NetshProbe;

/// Type alias for the application's poll loop.
type AppLoop = PollLoop<FileConfigSource, NetshProbe, NetshApplier>;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
///
/// Only produced in `--once` mode; the long-running loop logs cycle
/// failures and keeps going.
#[derive(Debug, Error)]
pub enum RunError {
    /// The single requested cycle failed before reaching any adapter.
    #[error(transparent)]
    Cycle(#[from] CycleError),
}

/// Runtime options extracted from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeOptions {
    config_path: PathBuf,
    dry_run: bool,
    once: bool,
}

impl From<&Cli> for RuntimeOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            dry_run: cli.dry_run,
            once: cli.once,
        }
    }
}

/// Executes the application.
///
/// # Errors
///
/// Returns an error only in `--once` mode, when the single cycle could not
/// load the config or probe the networks.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires
/// `netsh` and real signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(options: RuntimeOptions) -> Result<(), RunError> {
    let mut poll_loop = create_loop(&options);

    tracing::info!("Using config file '{}'", options.config_path.display());
    if options.dry_run {
        tracing::info!("Dry-run mode enabled - DNS changes will be logged but not applied");
    }

    if options.once {
        let report = poll_loop.run_cycle()?;
        tracing::info!("{}", summarize(&report));
        return Ok(());
    }

    poll_loop.run_until(shutdown_signal()).await;
    Ok(())
}

/// Creates the poll loop from runtime options.
fn create_loop(options: &RuntimeOptions) -> AppLoop {
    PollLoop::new(
        FileConfigSource::new(&options.config_path),
        NetshProbe::new(),
        NetshApplier::new(),
    )
    .with_dry_run(options.dry_run)
}

/// One-line summary of a cycle for `--once` mode.
fn summarize(report: &CycleReport) -> String {
    if report.is_idle() {
        return format!(
            "No DNS changes needed ({} adapter(s) unchanged)",
            report.unchanged.len()
        );
    }

    format!(
        "Processed {} adapter(s): {} updated, {} failed",
        report.outcomes.len(),
        report.outcomes.len() - report.failure_count(),
        report.failure_count()
    )
}

/// Returns a future that completes when a shutdown signal is received.
///
/// If a handler cannot be installed, that signal is simply never observed.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
