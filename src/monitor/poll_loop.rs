//! The detect-resolve-apply loop.
//!
//! This module provides [`PollLoop`], which owns all state that survives
//! between cycles, and the per-cycle result types [`CycleReport`] and
//! [`AdapterOutcome`].

use std::time::Duration;

use super::{ChangeTracker, CycleError};
use crate::config::{Config, ConfigSource, defaults};
use crate::dns::{ApplyError, DnsApplier, DnsPolicy};
use crate::network::{AdapterIdentity, NetworkProbe};

/// What happened to one changed adapter during a cycle.
#[derive(Debug)]
pub struct AdapterOutcome {
    /// The adapter and the identity it was processed for.
    pub entry: AdapterIdentity,
    /// The resolved policy.
    pub policy: DnsPolicy,
    /// Result of applying the policy. Always `Ok` in dry-run mode.
    pub result: Result<(), ApplyError>,
}

impl AdapterOutcome {
    /// Returns true if the policy was applied (or dry-run logged) without error.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Result of a cycle that got as far as the per-adapter stage.
#[derive(Debug, Default)]
pub struct CycleReport {
    /// Adapters whose identity changed, in probe order.
    pub outcomes: Vec<AdapterOutcome>,
    /// Adapters skipped because their identity was unchanged.
    pub unchanged: Vec<AdapterIdentity>,
}

impl CycleReport {
    /// Returns the number of adapters whose policy could not be applied.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_success()).count()
    }

    /// Returns true if no adapter needed any action.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Polls network identities and keeps adapter DNS settings in line with the
/// configured policy.
///
/// # Type Parameters
///
/// * `S` - The [`ConfigSource`] re-read at the start of every cycle
/// * `P` - The [`NetworkProbe`] reporting current (adapter, identity) pairs
/// * `A` - The [`DnsApplier`] used to change adapter DNS settings
///
/// # Cycle
///
/// 1. Load the config. On failure the cycle ends without any DNS action.
/// 2. Probe identities. On failure the cycle ends without any DNS action.
/// 3. For each pair whose identity changed: resolve, apply, record. An apply
///    failure is logged and recorded like a success, then the next pair is
///    processed.
///
/// Between cycles [`PollLoop::run_until`] sleeps for the interval of the
/// most recently loaded config, or a fixed fallback if none has loaded.
pub struct PollLoop<S, P, A> {
    source: S,
    probe: P,
    applier: A,
    tracker: ChangeTracker,
    interval: Option<Duration>,
    dry_run: bool,
}

impl<S, P, A> PollLoop<S, P, A>
where
    S: ConfigSource,
    P: NetworkProbe,
    A: DnsApplier,
{
    /// Creates a loop with an empty [`ChangeTracker`].
    #[must_use]
    pub fn new(source: S, probe: P, applier: A) -> Self {
        Self {
            source,
            probe,
            applier,
            tracker: ChangeTracker::new(),
            interval: None,
            dry_run: false,
        }
    }

    /// Enables or disables dry-run mode.
    ///
    /// In dry-run mode the resolved action is logged and recorded but the
    /// applier is never called.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the change tracker.
    #[must_use]
    pub const fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    /// Returns the applier (useful for inspecting test doubles).
    #[must_use]
    pub const fn applier(&self) -> &A {
        &self.applier
    }

    /// Returns how long to sleep before the next cycle.
    #[must_use]
    pub fn sleep_interval(&self) -> Duration {
        self.interval.unwrap_or_else(defaults::fallback_sleep)
    }

    /// Runs exactly one cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::Config`] or [`CycleError::Probe`] when the cycle
    /// stopped before any adapter was processed. Per-adapter failures are
    /// reported in the returned [`CycleReport`] instead.
    pub fn run_cycle(&mut self) -> Result<CycleReport, CycleError> {
        let config = self.source.load()?;
        self.interval = Some(config.interval());
        tracing::debug!("Loaded {config}");

        let snapshot = self.probe.snapshot()?;
        let mut report = CycleReport::default();

        for entry in snapshot {
            if self.tracker.should_process(&entry.adapter, &entry.identity) {
                report.outcomes.push(self.process(entry, &config));
            } else {
                tracing::debug!("No change for {entry}");
                report.unchanged.push(entry);
            }
        }

        Ok(report)
    }

    /// Runs one cycle and logs its failure, if any.
    pub fn tick(&mut self) -> Option<CycleReport> {
        match self.run_cycle() {
            Ok(report) => {
                if report.failure_count() > 0 {
                    tracing::warn!(
                        "{} of {} adapter(s) could not be updated",
                        report.failure_count(),
                        report.outcomes.len()
                    );
                }
                Some(report)
            }
            Err(e) => {
                tracing::error!("{e}");
                None
            }
        }
    }

    /// Runs cycles until `shutdown` completes.
    ///
    /// Shutdown is only observed while sleeping; a cycle in progress always
    /// runs to completion.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            self.tick();

            let sleep = self.sleep_interval();
            tracing::info!("Sleeping for {} ms.", sleep.as_millis());

            tokio::select! {
                biased;

                () = &mut shutdown => {
                    tracing::info!("Shutdown signal received, stopping...");
                    return;
                }

                () = tokio::time::sleep(sleep) => {}
            }
        }
    }

    fn process(&mut self, entry: AdapterIdentity, config: &Config) -> AdapterOutcome {
        let policy = DnsPolicy::for_adapter(&entry.adapter, &entry.identity, config);
        let adapter = entry.adapter.as_str();

        let result = if self.dry_run {
            tracing::info!("Dry-run: would set DNS to {policy} for adapter '{adapter}'");
            Ok(())
        } else {
            tracing::info!("Setting DNS to {policy} for adapter '{adapter}'");
            self.applier.apply(adapter, &policy)
        };

        if let Err(e) = &result {
            tracing::error!("{e}");
        }

        // Recorded even on failure so a broken adapter is not retried every cycle.
        self.tracker.record(&entry.adapter, &entry.identity);

        AdapterOutcome {
            entry,
            policy,
            result,
        }
    }
}

#[cfg(test)]
#[path = "poll_loop_tests.rs"]
mod tests;
