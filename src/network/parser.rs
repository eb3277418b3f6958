//! Parser for `netsh wlan show interfaces` reports.
//!
//! The report is a sequence of per-adapter blocks. A `Name` line opens a
//! block and the first `BSSID` line inside it closes the block with a
//! result. Labels match case-insensitively with any surrounding whitespace;
//! every other line is ignored.
//!
//! ```text
//!     Name                   : Wi-Fi
//!     State                  : connected
//!     SSID                   : home
//!     BSSID                  : aa:bb:cc:dd:ee:ff
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::AdapterIdentity;

static NAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Name\s*:\s*(\S.*)$").expect("valid name pattern"));

// Newer Windows builds label the field "AP BSSID".
static BSSID_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:AP\s+)?BSSID\s*:\s*(\S.*)$").expect("valid bssid pattern")
});

/// Where the parser is within the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParseState {
    /// Outside any adapter block (start of input, or after a pair was produced).
    #[default]
    Idle,
    /// Inside the block of the named adapter, waiting for its BSSID.
    InAdapter(String),
}

/// Line-at-a-time state machine over an interface report.
#[derive(Debug, Clone, Default)]
pub struct InterfaceReportParser {
    state: ParseState,
}

impl InterfaceReportParser {
    /// Creates a parser in the [`ParseState::Idle`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ParseState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &ParseState {
        &self.state
    }

    /// Consumes one line, returning a pair when it completes an adapter block.
    ///
    /// A `Name` line always replaces the current adapter, so a block without
    /// a BSSID yields nothing. A `BSSID` line outside a block is ignored.
    pub fn feed(&mut self, line: &str) -> Option<AdapterIdentity> {
        if let Some(name) = capture(&NAME_LINE, line) {
            self.state = ParseState::InAdapter(name.to_string());
            return None;
        }

        match std::mem::take(&mut self.state) {
            ParseState::Idle => None,
            ParseState::InAdapter(adapter) => {
                if let Some(bssid) = capture(&BSSID_LINE, line) {
                    Some(AdapterIdentity::new(adapter, bssid))
                } else {
                    self.state = ParseState::InAdapter(adapter);
                    None
                }
            }
        }
    }
}

/// Parses a full report into (adapter, identity) pairs, in report order.
#[must_use]
pub fn parse_interfaces(report: &str) -> Vec<AdapterIdentity> {
    let mut parser = InterfaceReportParser::new();
    report
        .split(['\r', '\n'])
        .filter_map(|line| parser.feed(line))
        .collect()
}

fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
