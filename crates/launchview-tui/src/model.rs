//! TUI application model (Elm architecture).

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossbeam_channel::Receiver;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use launchview_core::{Console, LogEntry, Severity, ViewDirective};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use crate::export;
use crate::footer::render_footer;
use crate::gauges::render_gauges;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::render_logs;
use crate::messages::TuiMessage;

/// File name prefix for console exports.
const EXPORT_PREFIX: &str = "launchview-logs";

/// Lines moved per page scroll.
const PAGE_SIZE: usize = 10;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// The console model this view projects.
    console: Console,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    /// Log scroll offset (first visible entry index).
    pub log_scroll_offset: usize,
    /// Player name shown in the header.
    player: Option<String>,
    /// Directory exports are written into.
    export_dir: PathBuf,
}

impl TuiApp {
    /// Create a new TUI app.
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>, player: Option<String>, export_dir: PathBuf) -> Self {
        Self {
            should_quit: false,
            console: Console::new(),
            rx,
            terminal_width: 80,
            terminal_height: 24,
            log_scroll_offset: 0,
            player,
            export_dir,
        }
    }

    /// The underlying console model.
    #[must_use]
    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Event(event) => {
                let directive = self.console.apply(event);
                self.obey(directive);
            }
            TuiMessage::Error(err) => {
                let directive = self.console.append(err, Severity::Critical);
                self.obey(directive);
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::Clear => {
                self.console.clear();
                self.log_scroll_offset = 0;
            }
            KeyAction::ToggleAutoScroll => {
                if self.console.toggle_auto_scroll() {
                    self.scroll_to_bottom();
                }
            }
            KeyAction::Export => {
                self.export();
            }
            KeyAction::ScrollUp => {
                self.console.set_auto_scroll(false);
                self.log_scroll_offset = self.log_scroll_offset.saturating_sub(1);
            }
            KeyAction::ScrollDown => {
                self.scroll_down(1);
            }
            KeyAction::PageUp => {
                self.console.set_auto_scroll(false);
                self.log_scroll_offset = self.log_scroll_offset.saturating_sub(PAGE_SIZE);
            }
            KeyAction::PageDown => {
                self.scroll_down(PAGE_SIZE);
            }
            KeyAction::Home => {
                self.console.set_auto_scroll(false);
                self.log_scroll_offset = 0;
            }
            KeyAction::End => {
                self.console.set_auto_scroll(true);
                self.scroll_to_bottom();
            }
            KeyAction::None => {}
        }
    }

    /// Write the current buffer to the export directory and record the
    /// outcome in the console. The outcome entry is not part of the file.
    pub fn export(&mut self) {
        let name = Console::export_file_name(EXPORT_PREFIX, Utc::now());
        let path = self.export_dir.join(name);
        let lines: Vec<String> = self.console.export_lines().collect();

        let directive = match export::write_lines(&path, &lines) {
            Ok(()) => self.console.append(
                format!("Logs exported to {}", path.display()),
                Severity::Success,
            ),
            Err(err) => {
                tracing::warn!("log export to {} failed: {err}", path.display());
                self.console
                    .append(format!("Export failed: {err}"), Severity::Critical)
            }
        };
        self.obey(directive);
    }

    /// Act on a rendering directive emitted by the model.
    fn obey(&mut self, directive: Option<ViewDirective>) {
        if directive == Some(ViewDirective::ScrollToBottom) {
            self.scroll_to_bottom();
        }
    }

    /// Scroll logs to the bottom.
    fn scroll_to_bottom(&mut self) {
        self.log_scroll_offset = self.console.len().saturating_sub(1);
    }

    /// Scroll down by `lines`, re-enabling auto-scroll at the bottom.
    fn scroll_down(&mut self, lines: usize) {
        self.log_scroll_offset += lines;
        let max_offset = self.console.len().saturating_sub(1);
        if self.log_scroll_offset >= max_offset {
            self.log_scroll_offset = max_offset;
            self.console.set_auto_scroll(true);
        }
    }

    /// Compute the vertical layout.
    ///
    /// Returns (header, logs, metrics, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // log panel
                Constraint::Length(3), // metrics gauges
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, logs_area, metrics_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(
            frame,
            header_area,
            self.player.as_deref(),
            self.console.status(),
            self.console.uptime(Instant::now()),
        );

        let entries: Vec<&LogEntry> = self.console.entries().collect();
        render_logs(frame, logs_area, &entries, self.log_scroll_offset);

        render_gauges(frame, metrics_area, self.console.metrics());

        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update,
    /// render), and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let tick_rate = Duration::from_millis(250);

        loop {
            // Render
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            // Poll for events with tick rate timeout
            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        let action = map_key(key_event);
                        self.handle_key_action(action);
                    }
                    Event::Resize(w, h) => {
                        self.terminal_width = w;
                        self.terminal_height = h;
                    }
                    _ => {}
                }
            }

            // Process any pending messages from the producers
            self.update();
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}
