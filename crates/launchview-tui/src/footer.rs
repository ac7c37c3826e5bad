//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(": quit | "),
        Span::styled("c", Style::default().fg(Color::Yellow)),
        Span::raw(": clear | "),
        Span::styled("a", Style::default().fg(Color::Yellow)),
        Span::raw(": auto-scroll | "),
        Span::styled("e", Style::default().fg(Color::Yellow)),
        Span::raw(": export | "),
        Span::styled("\u{2191}/\u{2193} PgUp/PgDn Home/End", Style::default().fg(Color::Yellow)),
        Span::raw(": scroll"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
