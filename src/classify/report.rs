//! Completed-period reports and their log-line rendering.

use std::fmt;

use chrono::{DateTime, Local};

/// Classification of a connectivity period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Online,
    Offline,
}

impl PeriodKind {
    /// Tag that opens the log line.
    pub fn tag(&self) -> &'static str {
        match self {
            PeriodKind::Online => "ON",
            PeriodKind::Offline => "OFF",
        }
    }
}

/// A closed connectivity period, ready to be appended to the log.
///
/// `Display` renders the external log-line format:
///
/// ```text
/// <ON|OFF> <start:%Y/%m/%dT%H:%M:%S> <duration_seconds> [<count> <mean> <stdev> <min> <max>]
/// ```
///
/// The bracketed latency summary is present only for online periods;
/// offline lines have exactly two fields after the tag.
#[derive(Debug, Clone)]
pub struct Report {
    pub kind: PeriodKind,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    /// Rendered latency summary, present only for online periods.
    pub stats: Option<String>,
}

impl Report {
    /// Whole seconds between period start and end, rounded.
    pub fn duration_seconds(&self) -> i64 {
        ((self.end - self.start).num_milliseconds() as f64 / 1000.0).round() as i64
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.kind.tag(),
            self.start.format("%Y/%m/%dT%H:%M:%S"),
            self.duration_seconds()
        )?;
        if let Some(stats) = &self.stats {
            write!(f, " {stats}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, h, m, s).unwrap()
    }

    #[test]
    fn offline_line_has_two_fields_after_tag() {
        let report = Report {
            kind: PeriodKind::Offline,
            start: at(9, 30, 0),
            end: at(9, 30, 42),
            stats: None,
        };
        assert_eq!(report.to_string(), "OFF 2026/03/14T09:30:00 42");
    }

    #[test]
    fn online_line_carries_the_summary() {
        let report = Report {
            kind: PeriodKind::Online,
            start: at(8, 0, 0),
            end: at(8, 1, 0),
            stats: Some("2 6.00 1.41 5.00 7.00".to_string()),
        };
        assert_eq!(
            report.to_string(),
            "ON 2026/03/14T08:00:00 60 2 6.00 1.41 5.00 7.00"
        );
    }

    #[test]
    fn duration_rounds_to_whole_seconds() {
        let start = at(10, 0, 0);
        let report = Report {
            kind: PeriodKind::Offline,
            start,
            end: start + chrono::Duration::milliseconds(1400),
            stats: None,
        };
        assert_eq!(report.duration_seconds(), 1);

        let report = Report {
            kind: PeriodKind::Offline,
            start,
            end: start + chrono::Duration::milliseconds(1600),
            stats: None,
        };
        assert_eq!(report.duration_seconds(), 2);
    }
}
