//! `netsh` backed [`DnsApplier`].

use super::{ApplyError, DnsApplier};
use crate::platform::{CommandRunner, NetshRunner};

/// Applier that configures IPv4 DNS servers with `netsh interface ipv4`.
///
/// Static servers are applied by clearing every configured server and then
/// adding each one with an explicit 1-based `index`, so the configured
/// order becomes the resolution priority.
#[derive(Debug, Clone, Default)]
pub struct NetshApplier<R = NetshRunner> {
    runner: R,
}

impl NetshApplier<NetshRunner> {
    /// Creates an applier that runs the real `netsh`.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_runner(NetshRunner::new())
    }
}

impl<R: CommandRunner> NetshApplier<R> {
    /// Creates an applier with a custom command runner.
    #[must_use]
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    fn run(&self, adapter: &str, args: &[String]) -> Result<(), ApplyError> {
        self.runner
            .run(args)
            .map(|_| ())
            .map_err(|source| ApplyError::Command {
                adapter: adapter.to_string(),
                source,
            })
    }
}

impl<R: CommandRunner> DnsApplier for NetshApplier<R> {
    fn set_automatic(&self, adapter: &str) -> Result<(), ApplyError> {
        self.run(adapter, &set_dhcp_args(adapter))
    }

    fn set_static(&self, adapter: &str, servers: &[String]) -> Result<(), ApplyError> {
        self.run(adapter, &delete_all_args(adapter))?;
        for (position, server) in servers.iter().enumerate() {
            tracing::debug!("Adding DNS server {server} at index {} on '{adapter}'", position + 1);
            self.run(adapter, &add_server_args(adapter, server, position + 1))?;
        }
        Ok(())
    }
}

fn name_arg(adapter: &str) -> String {
    format!("name=\"{adapter}\"")
}

fn set_dhcp_args(adapter: &str) -> Vec<String> {
    let mut args = ipv4_prefix(&["set", "dns"]);
    args.extend([name_arg(adapter), "source=dhcp".to_string()]);
    args
}

fn delete_all_args(adapter: &str) -> Vec<String> {
    let mut args = ipv4_prefix(&["delete", "dnsserver"]);
    args.extend([name_arg(adapter), "all".to_string()]);
    args
}

fn add_server_args(adapter: &str, server: &str, index: usize) -> Vec<String> {
    let mut args = ipv4_prefix(&["add", "dnsserver"]);
    args.extend([
        name_arg(adapter),
        format!("address={server}"),
        format!("index={index}"),
    ]);
    args
}

fn ipv4_prefix(verb: &[&str]) -> Vec<String> {
    ["interface", "ipv4"]
        .iter()
        .chain(verb)
        .map(ToString::to_string)
        .collect()
}
