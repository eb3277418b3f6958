//! Monitor layer: the poll loop and the state it carries between cycles.
//!
//! This module provides types for:
//! - Suppressing redundant re-application ([`ChangeTracker`])
//! - Running detect-resolve-apply cycles ([`PollLoop`])
//! - Reporting cycle results ([`CycleReport`], [`AdapterOutcome`], [`CycleError`])

mod error;
mod poll_loop;
mod tracker;

pub use error::CycleError;
pub use poll_loop::{AdapterOutcome, CycleReport, PollLoop};
pub use tracker::ChangeTracker;
