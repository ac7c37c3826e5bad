//! # launchview-tui
//!
//! Interactive console view using ratatui with Elm architecture.

pub mod export;
pub mod footer;
pub mod gauges;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod metrics;
pub mod model;
pub mod styles;

pub use export::write_lines;
pub use keymap::{map_key, KeyAction};
pub use messages::TuiMessage;
pub use metrics::MetricsCollector;
pub use model::TuiApp;
