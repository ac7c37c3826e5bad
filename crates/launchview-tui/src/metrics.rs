//! System metrics collection with sysinfo.

use launchview_core::MetricSample;
use sysinfo::System;

/// Metrics collector using sysinfo.
///
/// Refreshed on a fixed period by the host's sampler thread; each refresh
/// yields one [`MetricSample`] for the console.
pub struct MetricsCollector {
    system: System,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    /// Refresh system counters and take a sample.
    ///
    /// CPU usage is averaged across all cores. sysinfo needs two refreshes
    /// before CPU numbers are meaningful, so the first sample reads 0%.
    pub fn sample(&mut self) -> MetricSample {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        let cpus = self.system.cpus();
        let cpu_percent = if cpus.is_empty() {
            0.0
        } else {
            cpus.iter().map(|c| f64::from(c.cpu_usage())).sum::<f64>() / cpus.len() as f64
        };

        MetricSample {
            memory_used_bytes: self.system.used_memory(),
            memory_total_bytes: self.system.total_memory(),
            cpu_percent,
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_reads_system_memory() {
        let mut collector = MetricsCollector::new();
        let sample = collector.sample();
        // Any real system reports a nonzero memory total.
        assert!(sample.memory_total_bytes > 0);
        assert!(sample.memory_used_bytes <= sample.memory_total_bytes);
    }

    #[test]
    fn cpu_percent_stays_in_range() {
        let mut collector = MetricsCollector::new();
        let sample = collector.sample();
        assert!(sample.cpu_percent >= 0.0);
        assert!(sample.cpu_percent <= 100.0);
    }
}
