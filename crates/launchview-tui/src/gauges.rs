//! Resource bar gauges for the metrics panel.

use launchview_core::MetricsView;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the metrics panel: memory and CPU bar gauges side by side.
///
/// The fill width and color class come straight from the derived view; no
/// computation happens at render time.
pub fn render_gauges(frame: &mut Frame, area: Rect, metrics: Option<&MetricsView>) {
    let theme = ColorTheme::default();

    let Some(view) = metrics else {
        let placeholder = Paragraph::new("Waiting for metrics...")
            .style(theme.muted_style())
            .block(Block::default().borders(Borders::ALL).title(" Metrics "));
        frame.render_widget(placeholder, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let memory = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Memory "))
        .gauge_style(theme.class_style(view.memory_class))
        .percent(u16::from(view.memory_percent))
        .label(view.memory_text.clone());
    frame.render_widget(memory, columns[0]);

    let cpu = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" CPU "))
        .gauge_style(theme.class_style(view.cpu_class))
        .percent(u16::from(view.cpu_percent))
        .label(view.cpu_text.clone());
    frame.render_widget(cpu, columns[1]);
}
