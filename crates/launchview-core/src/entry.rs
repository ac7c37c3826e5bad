//! Timestamped, severity-tagged log entries.

use chrono::{DateTime, Local};

/// Severity tag attached to a log entry.
///
/// The four well-known tags map to variants; anything else is carried through
/// as an opaque custom tag rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Critical,
    /// A tag the console does not know. Kept verbatim.
    Custom(String),
}

impl Severity {
    /// Parse a severity tag. Unknown tags become [`Severity::Custom`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "info" => Self::Info,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "critical" => Self::Critical,
            other => Self::Custom(other.to_string()),
        }
    }

    /// The tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Custom(tag) => tag,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Info
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One console line: a message stamped with the wall-clock time it arrived
/// and the severity it carried. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DateTime<Local>,
    message: String,
    severity: Severity,
}

impl LogEntry {
    /// Create an entry stamped with the current wall-clock time.
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
            severity,
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    /// The line as it is displayed and exported: `[HH:MM:SS] message`.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!("[{}] {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}
