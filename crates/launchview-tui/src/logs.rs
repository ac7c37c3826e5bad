//! Scrollable log panel.

use launchview_core::LogEntry;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the scrollable log panel.
pub fn render_logs(frame: &mut Frame, area: Rect, entries: &[&LogEntry], scroll_offset: usize) {
    let theme = ColorTheme::default();
    let visible_height = area.height.saturating_sub(2) as usize; // account for borders
    let total = entries.len();

    let items: Vec<ListItem> = entries
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|entry| {
            ListItem::new(Line::raw(entry.display_line()))
                .style(theme.severity_style(entry.severity()))
        })
        .collect();

    let scroll_indicator = if total > visible_height {
        let pct = if total <= 1 {
            100
        } else {
            (scroll_offset * 100) / (total.saturating_sub(1)).max(1)
        };
        format!(" Console ({pct}%) ")
    } else {
        " Console ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(scroll_indicator)
            .border_style(Style::default().fg(theme.muted)),
    );

    frame.render_widget(list, area);
}
