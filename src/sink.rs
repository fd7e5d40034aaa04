//! Append-only log sink for completed-period reports.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::classify::Report;

/// Append-only UTF-8 report log.
///
/// The file is opened once and the handle held for the monitor's
/// lifetime; each report is written as a single line append by the
/// single writer, so lines never interleave.
#[derive(Debug)]
pub struct LogSink {
    file: File,
}

impl LogSink {
    /// Open the log file for appending, creating it if needed.
    ///
    /// Failure here is fatal to the monitor: there is no point
    /// sampling if reports cannot be persisted.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        Ok(Self { file })
    }

    /// Append one report as a single log line.
    pub async fn append(&mut self, report: &Report) -> Result<()> {
        let line = format!("{report}\n");
        self.file
            .write_all(line.as_bytes())
            .await
            .context("failed to append report")?;
        self.file.flush().await.context("failed to flush report log")?;
        Ok(())
    }
}
