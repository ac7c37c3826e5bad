//! Inbound event surface consumed from the host.

use serde::{Deserialize, Serialize};

use crate::metrics::MetricSample;

/// Memory portion of a metric event, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub used: u64,
    pub total: u64,
}

/// One event pushed by the producing side of the console.
///
/// On the wire these are tagged JSON objects:
/// `{"type":"log","message":"...","severity":"info"}`,
/// `{"type":"metrics","memory":{"used":1,"total":2},"cpu":42.5}`,
/// `{"type":"status","status":"Running"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConsoleEvent {
    /// A log line. A missing severity defaults to `info`.
    Log {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        severity: Option<String>,
    },
    /// A resource metric sample.
    Metrics { memory: MemoryUsage, cpu: f64 },
    /// A status string describing the producer.
    Status { status: String },
}

impl ConsoleEvent {
    /// Shorthand for an untagged log line.
    #[must_use]
    pub fn line(message: impl Into<String>) -> Self {
        Self::Log {
            message: message.into(),
            severity: None,
        }
    }
}

impl From<MetricSample> for ConsoleEvent {
    fn from(sample: MetricSample) -> Self {
        Self::Metrics {
            memory: MemoryUsage {
                used: sample.memory_used_bytes,
                total: sample.memory_total_bytes,
            },
            cpu: sample.cpu_percent,
        }
    }
}
