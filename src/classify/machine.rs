//! The outage classification state machine.

use chrono::{DateTime, Local};

use super::report::{PeriodKind, Report};
use super::stats::LatencyStats;
use crate::probe::{Observation, Outcome};

/// The current connectivity period, owned by the machine.
#[derive(Debug, Clone)]
enum Period {
    /// Before the first observation, or after a shutdown flush.
    None,
    Online {
        start: DateTime<Local>,
        stats: LatencyStats,
    },
    Offline {
        start: DateTime<Local>,
    },
}

/// Classifier state as visible from outside the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unknown,
    Online,
    Offline,
}

/// Pure reducer over observations that decides when a real outage
/// begins and ends.
///
/// Consumes one [`Observation`] per tick and emits a [`Report`] the
/// instant a period closes. A down interface never moves an
/// established period in either direction - its only effect is as the
/// tie-break from the initial state, where it cannot be told apart
/// from a confirmed outage because no baseline exists yet.
///
/// The machine itself never fails; reachability problems arrive
/// pre-classified in the observation.
#[derive(Debug, Clone)]
pub struct StateMachine {
    period: Period,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            period: Period::None,
        }
    }

    /// Current classifier state.
    pub fn state(&self) -> State {
        match self.period {
            Period::None => State::Unknown,
            Period::Online { .. } => State::Online,
            Period::Offline { .. } => State::Offline,
        }
    }

    /// Consume one observation.
    ///
    /// Returns the report for the period this observation closed, if
    /// it closed one. The closed period ends at the observation's
    /// timestamp.
    pub fn handle(&mut self, observation: &Observation) -> Option<Report> {
        let period = std::mem::replace(&mut self.period, Period::None);
        let (next, report) = Self::step(period, observation);
        self.period = next;
        report
    }

    fn step(period: Period, observation: &Observation) -> (Period, Option<Report>) {
        let timestamp = observation.timestamp;
        match (period, observation.outcome) {
            // First evidence of any kind of trouble opens an offline
            // period - including a down interface, which has no
            // baseline to be suppressed against yet.
            (Period::None, Outcome::InterfaceDown | Outcome::Unreachable) => {
                (Period::Offline { start: timestamp }, None)
            }
            (Period::None, Outcome::Reachable(latency)) => {
                (online_at(timestamp, latency), None)
            }

            // A down interface never moves an established period.
            (
                period @ (Period::Online { .. } | Period::Offline { .. }),
                Outcome::InterfaceDown,
            ) => (period, None),

            (Period::Online { start, mut stats }, Outcome::Reachable(latency)) => {
                stats.record(latency);
                (Period::Online { start, stats }, None)
            }
            // OUTAGE STARTS
            (Period::Online { start, stats }, Outcome::Unreachable) => {
                let report = Report {
                    kind: PeriodKind::Online,
                    start,
                    end: timestamp,
                    stats: Some(stats.summarize()),
                };
                (Period::Offline { start: timestamp }, Some(report))
            }

            (period @ Period::Offline { .. }, Outcome::Unreachable) => (period, None),
            // OUTAGE ENDS
            (Period::Offline { start }, Outcome::Reachable(latency)) => {
                let report = Report {
                    kind: PeriodKind::Offline,
                    start,
                    end: timestamp,
                    stats: None,
                };
                (online_at(timestamp, latency), Some(report))
            }
        }
    }

    /// Close the open period, if any, using `now` as its end time, and
    /// reset to the initial state.
    ///
    /// Called on graceful shutdown so an in-progress period is not
    /// silently lost.
    pub fn flush(&mut self, now: DateTime<Local>) -> Option<Report> {
        match std::mem::replace(&mut self.period, Period::None) {
            Period::None => None,
            Period::Online { start, stats } => Some(Report {
                kind: PeriodKind::Online,
                start,
                end: now,
                stats: Some(stats.summarize()),
            }),
            Period::Offline { start } => Some(Report {
                kind: PeriodKind::Offline,
                start,
                end: now,
                stats: None,
            }),
        }
    }
}

fn online_at(start: DateTime<Local>, latency: f64) -> Period {
    let mut stats = LatencyStats::new();
    stats.record(latency);
    Period::Online { start, stats }
}
