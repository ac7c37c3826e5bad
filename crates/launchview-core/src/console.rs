//! The stream display model: bounded log storage plus derived view state.

use std::time::Instant;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::buffer::LogBuffer;
use crate::classify::{classify_status, SeverityClass};
use crate::entry::{LogEntry, Severity};
use crate::event::ConsoleEvent;
use crate::metrics::{MetricSample, MetricsView};
use crate::uptime::Uptime;

/// Audit entry recorded when the buffer is cleared.
const CLEARED_MESSAGE: &str = "Logs cleared";

/// Rendering directive emitted by the model for the hosting view to act on.
/// The model never touches the screen itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDirective {
    ScrollToBottom,
}

/// The latest status string with its derived class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub text: String,
    /// `None` when no keyword matched; the view renders it unstyled.
    pub class: Option<SeverityClass>,
}

/// The console model. The host creates one instance per view lifetime and
/// drops it on view close; there is no ambient state.
pub struct Console {
    buffer: LogBuffer,
    auto_scroll: bool,
    started_at: Instant,
    status: Option<StatusView>,
    metrics: Option<MetricsView>,
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self::with_buffer(LogBuffer::new())
    }

    /// Build around a custom buffer bound. Used by tests and embedders.
    #[must_use]
    pub fn with_buffer(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            auto_scroll: true,
            started_at: Instant::now(),
            status: None,
            metrics: None,
        }
    }

    /// Feed one inbound event through the model.
    pub fn apply(&mut self, event: ConsoleEvent) -> Option<ViewDirective> {
        match event {
            ConsoleEvent::Log { message, severity } => {
                let severity = severity
                    .as_deref()
                    .map_or(Severity::Info, Severity::from_tag);
                self.append(message, severity)
            }
            ConsoleEvent::Metrics { memory, cpu } => {
                self.apply_metrics(&MetricSample {
                    memory_used_bytes: memory.used,
                    memory_total_bytes: memory.total,
                    cpu_percent: cpu,
                });
                None
            }
            ConsoleEvent::Status { status } => {
                self.set_status(&status);
                None
            }
        }
    }

    /// Append a log entry stamped with the current wall-clock time.
    ///
    /// Returns a scroll directive when auto-scroll is enabled.
    pub fn append(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
    ) -> Option<ViewDirective> {
        self.buffer.push(LogEntry::new(message, severity));
        self.auto_scroll.then_some(ViewDirective::ScrollToBottom)
    }

    /// Replace the displayed metric sample with a freshly derived view.
    pub fn apply_metrics(&mut self, sample: &MetricSample) {
        self.metrics = Some(MetricsView::derive(sample));
    }

    /// Record a status string and its keyword-derived class.
    pub fn set_status(&mut self, status: &str) {
        self.status = Some(StatusView {
            text: status.to_string(),
            class: classify_status(status),
        });
    }

    /// Flip auto-scroll and return the new state. The view scrolls to the
    /// bottom exactly when the new state is true.
    pub fn toggle_auto_scroll(&mut self) -> bool {
        self.auto_scroll = !self.auto_scroll;
        self.auto_scroll
    }

    pub fn set_auto_scroll(&mut self, enabled: bool) {
        self.auto_scroll = enabled;
    }

    /// Hard reset of the buffer, leaving a single audit entry behind.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer.push(LogEntry::new(CLEARED_MESSAGE, Severity::Info));
    }

    /// One display line per entry, insertion order. Lazy and restartable:
    /// each call re-projects the buffer as it stands.
    pub fn export_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.buffer.iter().map(LogEntry::display_line)
    }

    /// File name for an export taken at `now`:
    /// `<prefix>-<ISO8601 with ':' replaced by '-'>.txt`.
    #[must_use]
    pub fn export_file_name(prefix: &str, now: DateTime<Utc>) -> String {
        let stamp = now
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace(':', "-");
        format!("{prefix}-{stamp}.txt")
    }

    /// Elapsed time since this console was created.
    #[must_use]
    pub fn uptime(&self, now: Instant) -> Uptime {
        Uptime::between(self.started_at, now)
    }

    /// Entries in insertion order, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.buffer.iter()
    }

    /// The most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.buffer.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusView> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn metrics(&self) -> Option<&MetricsView> {
        self.metrics.as_ref()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
