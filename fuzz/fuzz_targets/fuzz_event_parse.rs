#![no_main]

use libfuzzer_sys::fuzz_target;

use launchview_core::{Console, ConsoleEvent};

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let mut console = Console::new();

    // Any line the wire parser accepts must be applicable without panics;
    // anything else degrades to a raw log line, which must also apply.
    let event = match serde_json::from_str::<ConsoleEvent>(line) {
        Ok(event) => event,
        Err(_) => ConsoleEvent::line(line),
    };
    console.apply(event);

    assert!(console.len() <= 1);
});
