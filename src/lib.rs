//! # pingwatch
//!
//! Connectivity monitor that logs outage and uptime periods for a
//! single network landmark, ignoring outages that are explained by the
//! local interface being down.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                         Monitor                            │
//! │  ┌─────────┐     ┌────────────┐     ┌────────┐             │
//! │  │  probe  │────▶│  classify  │────▶│  sink  │──▶ log file │
//! │  │(sampling)     │  (reducer) │     │(append)│             │
//! │  └─────────┘     └────────────┘     └────────┘             │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`probe`]**: the sampling boundary - the [`Sampler`] trait plus
//!   the production [`LandmarkSampler`] combining an interface
//!   liveness check with an ICMP echo probe
//! - **[`classify`]**: the pure-reducer [`StateMachine`] that decides
//!   when a real outage begins and ends, and the per-period
//!   [`LatencyStats`]
//! - **[`sink`]**: the append-only report log
//! - **[`monitor`]**: the fixed-interval loop driver with the
//!   cooperative shutdown and flush path
//!
//! ## Example
//!
//! The classifier is directly usable without any I/O:
//!
//! ```
//! use chrono::Local;
//! use pingwatch::{Observation, Outcome, StateMachine};
//!
//! let mut machine = StateMachine::new();
//! let tick = |outcome| Observation::new(Local::now(), outcome);
//!
//! assert!(machine.handle(&tick(Outcome::Reachable(12.0))).is_none());
//! let report = machine.handle(&tick(Outcome::Unreachable)).expect("period closed");
//! assert!(report.to_string().starts_with("ON "));
//! ```

pub mod classify;
pub mod monitor;
pub mod probe;
pub mod sink;

// Re-export main types for convenience
pub use classify::{LatencyStats, PeriodKind, Report, State, StateMachine};
pub use monitor::Monitor;
pub use probe::{LandmarkSampler, Observation, Outcome, Sampler};
pub use sink::LogSink;
