//! Sampling of landmark reachability.
//!
//! This module provides a trait-based abstraction for producing one
//! [`Observation`] per sampling tick. The production implementation
//! ([`LandmarkSampler`]) combines a local-interface liveness check with
//! an ICMP echo probe; tests substitute scripted samplers behind the
//! same trait.

mod iface;
mod observation;
mod ping;
mod sampler;

pub use observation::{Observation, Outcome};
pub use sampler::LandmarkSampler;

use anyhow::Result;
use async_trait::async_trait;

/// Trait for producing one observation per sampling tick.
///
/// Reachability failures are never surfaced as errors: a failed
/// liveness check becomes [`Outcome::InterfaceDown`] and a failed or
/// timed-out probe becomes [`Outcome::Unreachable`]. An `Err` from
/// `observe` means something outside that contract went wrong (for
/// example the probe process could not be spawned at all) and
/// terminates the monitor.
#[async_trait]
pub trait Sampler: Send {
    /// Produce the observation for this tick.
    ///
    /// May suspend while the probe is pending, up to its timeout.
    async fn observe(&mut self) -> Result<Observation>;
}
