//! TUI styles and color themes.

use launchview_core::{Severity, SeverityClass};
use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub good: Color,
    pub warning: Color,
    pub critical: Color,
    pub success: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            good: Color::Green,
            warning: Color::Yellow,
            critical: Color::Red,
            success: Color::Green,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for a severity class (load levels, status coloring).
    #[must_use]
    pub fn class_style(&self, class: SeverityClass) -> Style {
        let color = match class {
            SeverityClass::Good => self.good,
            SeverityClass::Warning => self.warning,
            SeverityClass::Critical => self.critical,
        };
        Style::default().fg(color)
    }

    /// Style for a log entry severity tag.
    #[must_use]
    pub fn severity_style(&self, severity: &Severity) -> Style {
        let color = match severity {
            Severity::Info => self.text,
            Severity::Success => self.success,
            Severity::Warning => self.warning,
            Severity::Critical => self.critical,
            Severity::Custom(_) => self.muted,
        };
        Style::default().fg(color)
    }
}
