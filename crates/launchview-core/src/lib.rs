//! # launchview-core
//!
//! Stream display model for a hosted process console: a capacity-bounded
//! log buffer, metric and status classification, and the derived view state
//! a front end renders. No terminal or I/O coupling lives here; the model
//! emits directives and formatted strings for the host to act on.

pub mod buffer;
pub mod classify;
pub mod console;
pub mod entry;
pub mod event;
pub mod metrics;
pub mod uptime;
pub mod username;

pub use buffer::{LogBuffer, LOG_CAPACITY};
pub use classify::{classify_percent, classify_status, SeverityClass};
pub use console::{Console, StatusView, ViewDirective};
pub use entry::{LogEntry, Severity};
pub use event::{ConsoleEvent, MemoryUsage};
pub use metrics::{MetricSample, MetricsView};
pub use uptime::Uptime;
pub use username::UsernameError;
