//! Property-based tests for the console model.

use proptest::prelude::*;

use launchview_core::{
    classify_percent, Console, LogBuffer, LogEntry, MetricSample, MetricsView, Severity,
    SeverityClass, Uptime, LOG_CAPACITY,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The buffer never exceeds its bound and always keeps the newest
    /// entries in original relative order.
    #[test]
    fn buffer_keeps_the_newest_entries(count in 1usize..2500) {
        let mut buffer = LogBuffer::new();
        for i in 0..count {
            buffer.push(LogEntry::new(format!("msg {i}"), Severity::Info));
        }
        prop_assert!(buffer.len() <= LOG_CAPACITY);
        prop_assert_eq!(buffer.len(), count.min(LOG_CAPACITY));

        let first_kept = count.saturating_sub(LOG_CAPACITY);
        let messages: Vec<String> =
            buffer.iter().map(|e| e.message().to_string()).collect();
        let expected: Vec<String> =
            (first_kept..count).map(|i| format!("msg {i}")).collect();
        prop_assert_eq!(messages, expected);
    }

    /// Classification is total and monotone: a higher percentage never
    /// maps to a lower tier.
    #[test]
    fn classification_is_monotone(a in 0u8..=100, b in 0u8..=100) {
        let rank = |class: SeverityClass| match class {
            SeverityClass::Good => 0,
            SeverityClass::Warning => 1,
            SeverityClass::Critical => 2,
        };
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(classify_percent(low)) <= rank(classify_percent(high)));
    }

    /// Metric derivation is pure: the same sample always yields the same
    /// view, and the fill widths stay within 0-100.
    #[test]
    fn metric_derivation_is_pure_and_bounded(
        used in 0u64..=1u64 << 40,
        total in 0u64..=1u64 << 40,
        cpu in -10.0f64..200.0,
    ) {
        let sample = MetricSample {
            memory_used_bytes: used,
            memory_total_bytes: total,
            cpu_percent: cpu,
        };
        let view = MetricsView::derive(&sample);
        prop_assert_eq!(&view, &MetricsView::derive(&sample));
        prop_assert!(view.memory_percent <= 100);
        prop_assert!(view.cpu_percent <= 100);
    }

    /// Export yields exactly one line per appended entry, each carrying
    /// its message.
    #[test]
    fn export_round_trips_messages(count in 0usize..200) {
        let mut console = Console::new();
        for i in 0..count {
            console.append(format!("message {i}"), Severity::Info);
        }
        let lines: Vec<String> = console.export_lines().collect();
        prop_assert_eq!(lines.len(), count);
        for (i, line) in lines.iter().enumerate() {
            prop_assert!(line.contains(&format!("message {i}")));
        }
    }

    /// Uptime decomposition recomposes to the original whole seconds.
    #[test]
    fn uptime_decomposition_recomposes(secs in 0u64..1_000_000) {
        let uptime = Uptime::from_duration(std::time::Duration::from_secs(secs));
        prop_assert!(uptime.minutes < 60);
        prop_assert!(uptime.seconds < 60);
        prop_assert_eq!(
            uptime.hours * 3600 + uptime.minutes * 60 + uptime.seconds,
            secs
        );
    }
}
