//! Latency accumulation for an online period.

/// Latency samples recorded during a single online period.
///
/// Owned exclusively by the open online period and destroyed with it.
/// The summary is recomputed from the full sample set on demand, so
/// arrival order never affects the rendered line and repeated calls
/// without an intervening `record` yield identical output.
#[derive(Debug, Clone, Default)]
pub struct LatencyStats {
    samples: Vec<f64>,
}

impl LatencyStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one latency sample in milliseconds.
    pub fn record(&mut self, latency_ms: f64) {
        self.samples.push(latency_ms);
    }

    /// Render the summary: count, mean, stdev, min, max, all in
    /// milliseconds with two fraction digits.
    ///
    /// With no samples the line degenerates to `0 0.00 0.00 0.00`. A
    /// single sample reports a standard deviation of zero - the sample
    /// stdev formula divides by n-1 and is undefined for a singleton.
    /// With two or more samples the stdev is Bessel-corrected.
    pub fn summarize(&self) -> String {
        if self.samples.is_empty() {
            return "0 0.00 0.00 0.00".to_string();
        }

        if let [single] = self.samples.as_slice() {
            return format!("1 {single:.2} 0.00 {single:.2} {single:.2}");
        }

        let n = self.samples.len();
        let mean = self.samples.iter().sum::<f64>() / n as f64;
        let variance =
            self.samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let min = self.samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        format!("{n} {mean:.2} {:.2} {min:.2} {max:.2}", variance.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_has_four_fields() {
        let stats = LatencyStats::new();
        assert_eq!(stats.summarize(), "0 0.00 0.00 0.00");
    }

    #[test]
    fn single_sample_has_zero_stdev() {
        let mut stats = LatencyStats::new();
        stats.record(12.5);
        assert_eq!(stats.summarize(), "1 12.50 0.00 12.50 12.50");
    }

    #[test]
    fn three_samples() {
        let mut stats = LatencyStats::new();
        stats.record(10.0);
        stats.record(20.0);
        stats.record(30.0);
        assert_eq!(stats.summarize(), "3 20.00 10.00 10.00 30.00");
    }

    #[test]
    fn order_of_arrival_does_not_matter() {
        let mut forward = LatencyStats::new();
        let mut reverse = LatencyStats::new();
        for s in [5.0, 7.0, 9.0] {
            forward.record(s);
        }
        for s in [9.0, 7.0, 5.0] {
            reverse.record(s);
        }
        assert_eq!(forward.summarize(), reverse.summarize());
    }

    #[test]
    fn summarize_is_idempotent() {
        let mut stats = LatencyStats::new();
        stats.record(5.0);
        stats.record(7.0);
        assert_eq!(stats.summarize(), stats.summarize());
    }

    #[test]
    fn two_samples_use_bessel_correction() {
        let mut stats = LatencyStats::new();
        stats.record(5.0);
        stats.record(7.0);
        // variance = ((5-6)^2 + (7-6)^2) / (2-1) = 2, stdev = 1.41...
        assert_eq!(stats.summarize(), "2 6.00 1.41 5.00 7.00");
    }
}
