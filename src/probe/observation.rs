//! The per-tick unit consumed by the classifier.

use chrono::{DateTime, Local};

/// What one sampling tick learned about the landmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The local interface is down; nothing is known about the landmark.
    InterfaceDown,
    /// The interface is up but the echo probe failed or timed out.
    Unreachable,
    /// The echo probe succeeded with this round-trip latency in
    /// milliseconds. Never negative.
    Reachable(f64),
}

/// One tick's classified sampling result.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    /// Captured at the start of the tick, before the probe runs, so a
    /// period closed by this observation ends when sampling began
    /// rather than when the probe completed.
    pub timestamp: DateTime<Local>,
    pub outcome: Outcome,
}

impl Observation {
    pub fn new(timestamp: DateTime<Local>, outcome: Outcome) -> Self {
        Self { timestamp, outcome }
    }
}
