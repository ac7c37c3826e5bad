//! Metric samples and their display derivation.

use crate::classify::{classify_percent, SeverityClass};

/// Point-in-time resource measurement pushed by the host.
///
/// Transient: each sample fully replaces the previous displayed one. No
/// history is kept and no smoothing is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSample {
    pub memory_used_bytes: u64,
    pub memory_total_bytes: u64,
    /// 0-100, fractional allowed. Displayed rounded.
    pub cpu_percent: f64,
}

/// Display-ready projection of one metric sample: formatted strings, bar
/// fill widths and their classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsView {
    /// `"<used> MB / <total> MB"`.
    pub memory_text: String,
    /// Bar fill width, 0-100.
    pub memory_percent: u8,
    pub memory_class: SeverityClass,
    /// `"<cpu>%"`.
    pub cpu_text: String,
    /// Bar fill width, 0-100.
    pub cpu_percent: u8,
    pub cpu_class: SeverityClass,
}

impl MetricsView {
    /// Derive the view for a sample.
    ///
    /// Pure and idempotent: the same sample always yields the same view.
    /// A zero memory total is defined as 0% rather than a division.
    #[must_use]
    pub fn derive(sample: &MetricSample) -> Self {
        let used_mb = bytes_to_mb(sample.memory_used_bytes);
        let total_mb = bytes_to_mb(sample.memory_total_bytes);
        let memory_percent = if sample.memory_total_bytes == 0 {
            0
        } else {
            #[allow(clippy::cast_precision_loss)]
            to_percent(
                sample.memory_used_bytes as f64 / sample.memory_total_bytes as f64 * 100.0,
            )
        };
        let cpu_percent = to_percent(sample.cpu_percent);

        Self {
            memory_text: format!("{used_mb} MB / {total_mb} MB"),
            memory_percent,
            memory_class: classify_percent(memory_percent),
            cpu_text: format!("{cpu_percent}%"),
            cpu_percent,
            cpu_class: classify_percent(cpu_percent),
        }
    }
}

impl From<&MetricSample> for MetricsView {
    fn from(sample: &MetricSample) -> Self {
        Self::derive(sample)
    }
}

/// Round a byte count to whole mebibytes.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bytes_to_mb(bytes: u64) -> u64 {
    (bytes as f64 / (1024.0 * 1024.0)).round() as u64
}

/// Round to the nearest whole percent, clamped to 0-100.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
