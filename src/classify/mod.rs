//! Outage classification.
//!
//! The [`StateMachine`] is a pure reducer over per-tick observations:
//! it owns the current connectivity period, accumulates latency samples
//! for online periods in a [`LatencyStats`], and emits a [`Report`] the
//! instant a period closes. All I/O lives elsewhere - the classifier
//! itself never fails.

mod machine;
mod report;
mod stats;

pub use machine::{State, StateMachine};
pub use report::{PeriodKind, Report};
pub use stats::LatencyStats;
