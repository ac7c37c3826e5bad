//! TUI message types (Elm Messages).

use launchview_core::ConsoleEvent;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// An inbound console event from a producer thread.
    Event(ConsoleEvent),
    /// Tick event for periodic updates (uptime readout).
    Tick,
    /// Quit the application.
    Quit,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// Producer-side error, recorded as a critical console entry.
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::Event(ConsoleEvent::line("hello"));
        assert!(matches!(msg, TuiMessage::Event(_)));

        let msg = TuiMessage::Tick;
        assert!(matches!(msg, TuiMessage::Tick));

        let msg = TuiMessage::Resize {
            width: 80,
            height: 24,
        };
        assert!(matches!(msg, TuiMessage::Resize { .. }));

        let msg = TuiMessage::Error("stream broke".to_string());
        assert!(matches!(msg, TuiMessage::Error(_)));
    }
}
