#![no_main]

use libfuzzer_sys::fuzz_target;

use launchview_core::{classify_percent, classify_status, username};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Status classification and name validation accept any string.
        let _ = classify_status(text);
        let _ = username::validate(text);
    }

    if let Some(&byte) = data.first() {
        let _ = classify_percent(byte.min(100));
    }
});
