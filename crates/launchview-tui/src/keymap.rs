//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    Clear,
    ToggleAutoScroll,
    Export,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char('c') => KeyAction::Clear,
        KeyCode::Char('a') => KeyAction::ToggleAutoScroll,
        KeyCode::Char('e') => KeyAction::Export,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Quit);

        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_cancels_plain_c_clears() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Cancel);

        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Clear);
    }

    #[test]
    fn auto_scroll_key() {
        let event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ToggleAutoScroll);
    }

    #[test]
    fn export_key() {
        let event = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Export);
    }

    #[test]
    fn scroll_keys() {
        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ScrollUp);

        let event = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ScrollDown);
    }

    #[test]
    fn page_keys() {
        let event = KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::PageUp);

        let event = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::PageDown);
    }

    #[test]
    fn home_end_keys() {
        let event = KeyEvent::new(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Home);

        let event = KeyEvent::new(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::End);
    }

    #[test]
    fn unknown_key() {
        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::None);
    }
}
