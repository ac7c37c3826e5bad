//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

/// launchview — console view for a hosted game process.
#[derive(Parser, Debug)]
#[command(name = "launchview", version, about)]
pub struct AppConfig {
    /// Offline player name shown in the header (3-16 letters, digits or
    /// underscores).
    #[arg(short, long, env = "LAUNCHVIEW_PLAYER")]
    pub player: Option<String>,

    /// Parse stdin as JSON-lines events instead of raw text lines.
    #[arg(long)]
    pub json: bool,

    /// System metrics sampling period (e.g. "1s", "500ms").
    #[arg(long, default_value = "1s", env = "LAUNCHVIEW_METRICS_PERIOD")]
    pub metrics_period: String,

    /// Disable the system metrics sampler.
    #[arg(long)]
    pub no_metrics: bool,

    /// Directory log exports are written into.
    #[arg(long, default_value = ".", env = "LAUNCHVIEW_EXPORT_DIR")]
    pub export_dir: PathBuf,

    /// Print entries to stdout instead of running the interactive console.
    #[arg(long)]
    pub plain: bool,

    /// In plain mode, write a log export when the input stream ends.
    #[arg(long)]
    pub export_on_close: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the metrics period into a Duration.
    #[must_use]
    pub fn metrics_period_duration(&self) -> std::time::Duration {
        parse_duration(&self.metrics_period).unwrap_or(std::time::Duration::from_secs(1))
    }
}

/// Parse a duration string like "5m", "1h", "30s", "500ms".
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 3600))
    } else if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(std::time::Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    }
}
