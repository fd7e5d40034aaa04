//! The sampling loop driver.

use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use tokio::sync::watch;
use tracing::info;

use crate::classify::{PeriodKind, StateMachine};
use crate::probe::Sampler;
use crate::sink::LogSink;

/// Drives the sampler at a fixed interval and feeds the classifier.
///
/// Ticks are strictly sequential: one observation is acquired, handed
/// to the state machine, and any resulting report appended before the
/// inter-tick sleep begins. A slow probe delays the next tick rather
/// than overlapping with it.
pub struct Monitor {
    sampler: Box<dyn Sampler>,
    machine: StateMachine,
    sink: LogSink,
    interval: Duration,
}

impl Monitor {
    pub fn new(sampler: Box<dyn Sampler>, sink: LogSink, interval: Duration) -> Self {
        Self {
            sampler,
            machine: StateMachine::new(),
            sink,
            interval,
        }
    }

    /// Run until the stop flag is raised, then flush any open period.
    ///
    /// The flag is honored cooperatively: the tick in progress always
    /// finishes (an in-flight probe is never cancelled) and only the
    /// inter-tick sleep is raced against the flag. A dropped sender
    /// counts as a stop request.
    pub async fn run(&mut self, mut stop: watch::Receiver<bool>) -> Result<()> {
        loop {
            let observation = self.sampler.observe().await?;
            if let Some(report) = self.machine.handle(&observation) {
                info!(%report, "period closed");
                self.sink.append(&report).await?;
            }

            if *stop.borrow() {
                break;
            }
            tokio::select! {
                () = tokio::time::sleep(self.interval) => {}
                changed = stop.changed() => {
                    if changed.is_err() || *stop.borrow() {
                        break;
                    }
                }
            }
        }

        self.flush().await
    }

    /// Emit the report for the period open at shutdown, if any.
    async fn flush(&mut self) -> Result<()> {
        if let Some(report) = self.machine.flush(Local::now()) {
            if report.kind == PeriodKind::Offline {
                info!("shutdown during outage");
            }
            info!(%report, "flushed open period");
            self.sink.append(&report).await?;
        }
        Ok(())
    }
}
