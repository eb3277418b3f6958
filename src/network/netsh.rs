//! `netsh` backed [`NetworkProbe`].

use super::parser::parse_interfaces;
use super::{AdapterIdentity, NetworkProbe, ProbeError};
use crate::platform::{CommandRunner, NetshRunner};

/// Probe that parses `netsh wlan show interfaces`.
///
/// # Example
///
/// ```no_run
/// use wlan_dns::network::{NetshProbe, NetworkProbe};
///
/// let probe = NetshProbe::new();
/// for pair in probe.snapshot().expect("netsh failed") {
///     println!("{pair}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct NetshProbe<R = NetshRunner> {
    runner: R,
}

impl NetshProbe<NetshRunner> {
    /// Creates a probe that runs the real `netsh`.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_runner(NetshRunner::new())
    }
}

impl<R: CommandRunner> NetshProbe<R> {
    /// Creates a probe with a custom command runner.
    #[must_use]
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> NetworkProbe for NetshProbe<R> {
    fn snapshot(&self) -> Result<Vec<AdapterIdentity>, ProbeError> {
        let args = ["wlan", "show", "interfaces"].map(String::from);
        let report = self.runner.run(&args)?;
        Ok(parse_interfaces(&report))
    }
}
