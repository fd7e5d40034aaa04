//! Production sampler combining interface liveness and the echo probe.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use tracing::debug;

use super::ping::{self, EchoReply};
use super::{iface, Observation, Outcome, Sampler};

/// Samples reachability of a single landmark through a specific local
/// interface.
///
/// Each call to `observe` runs the liveness check first; when the
/// interface is down the probe is skipped entirely, since a probe
/// failure would then say nothing about the landmark.
#[derive(Debug, Clone)]
pub struct LandmarkSampler {
    landmark: String,
    iface: String,
    timeout: Duration,
}

impl LandmarkSampler {
    pub fn new(
        landmark: impl Into<String>,
        iface: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            landmark: landmark.into(),
            iface: iface.into(),
            timeout,
        }
    }
}

#[async_trait]
impl Sampler for LandmarkSampler {
    async fn observe(&mut self) -> Result<Observation> {
        // Stamp the tick before any suspension point.
        let timestamp = Local::now();

        if !iface::is_active(&self.iface).await {
            debug!(iface = %self.iface, "interface is not online");
            return Ok(Observation::new(timestamp, Outcome::InterfaceDown));
        }

        match ping::probe(&self.landmark, self.timeout).await? {
            EchoReply::Latency(latency_ms) => {
                debug!(landmark = %self.landmark, latency_ms, "echo reply");
                Ok(Observation::new(timestamp, Outcome::Reachable(latency_ms)))
            }
            EchoReply::Timeout => {
                debug!(landmark = %self.landmark, "landmark is not reachable");
                Ok(Observation::new(timestamp, Outcome::Unreachable))
            }
        }
    }
}
