//! TUI header panel.

use launchview_core::{StatusView, Uptime};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel: app name, player, producer status, uptime.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    player: Option<&str>,
    status: Option<&StatusView>,
    uptime: Uptime,
) {
    let theme = ColorTheme::default();
    let mut spans = vec![Span::styled("launchview", theme.header_style())];

    if let Some(name) = player {
        spans.push(Span::raw(format!(" | Player: {name}")));
    }

    spans.push(Span::raw(" | Status: "));
    match status {
        Some(view) => {
            let style = view
                .class
                .map_or_else(ratatui::style::Style::default, |class| {
                    theme.class_style(class)
                });
            spans.push(Span::styled(view.text.clone(), style));
        }
        None => spans.push(Span::styled("-", theme.muted_style())),
    }

    spans.push(Span::raw(format!(" | Up {uptime}")));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" launchview ");

    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}
