#![no_main]

use libfuzzer_sys::fuzz_target;

use launchview_core::{Console, MetricSample, Severity, LOG_CAPACITY};

fuzz_target!(|data: &[u8]| {
    let mut console = Console::new();

    // Interpret each byte as one operation on the model.
    for (i, &byte) in data.iter().enumerate() {
        match byte % 8 {
            0..=3 => {
                console.append(format!("msg {i}"), Severity::Info);
            }
            4 => {
                console.clear();
                assert_eq!(console.len(), 1);
            }
            5 => {
                console.toggle_auto_scroll();
            }
            6 => {
                console.apply_metrics(&MetricSample {
                    memory_used_bytes: u64::from(byte) << 20,
                    memory_total_bytes: (data.len() as u64) << 20,
                    cpu_percent: f64::from(byte),
                });
            }
            _ => {
                let count = console.export_lines().count();
                assert_eq!(count, console.len());
            }
        }
        assert!(console.len() <= LOG_CAPACITY);
    }
});
