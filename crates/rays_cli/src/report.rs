//! Benchmark timing report.

use std::io::Write;

use serde::Serialize;

/// Per-pass elapsed times collected by the benchmark loop.
#[derive(Debug, Default)]
pub struct BenchmarkReport {
    samples: Vec<f64>,
}

/// Serialized form: `{"average": .., "samples": [..]}`.
#[derive(Serialize)]
struct Record<'a> {
    average: f64,
    samples: &'a [f64],
}

impl BenchmarkReport {
    /// Record one pass's elapsed seconds.
    pub fn push(&mut self, seconds: f64) {
        self.samples.push(seconds);
    }

    /// Mean of the recorded passes; zero when none were recorded.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Serialize the report as JSON.
    pub fn write_to<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer(
            writer,
            &Record {
                average: self.average(),
                samples: &self.samples,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_recorded_passes() {
        let mut report = BenchmarkReport::default();
        for s in [1.0, 2.0, 3.0] {
            report.push(s);
        }
        assert_eq!(report.average(), 2.0);
    }

    #[test]
    fn empty_report_averages_to_zero() {
        assert_eq!(BenchmarkReport::default().average(), 0.0);
    }

    #[test]
    fn serializes_average_and_samples() {
        let mut report = BenchmarkReport::default();
        report.push(0.5);
        report.push(1.5);

        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["average"], 1.0);
        assert_eq!(value["samples"], serde_json::json!([0.5, 1.5]));
    }
}
