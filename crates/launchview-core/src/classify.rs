//! Severity class derivation from percentages and status keywords.

/// Three-tier qualitative load class. Recomputed on every update, never
/// stored as state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityClass {
    Good,
    Warning,
    Critical,
}

impl SeverityClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Keyword groups checked in table order; the first group with a matching
/// word wins. Good is deliberately checked before critical before warning:
/// the groups are not mutually exclusive and an incidental ordering would be
/// a latent bug.
const STATUS_KEYWORDS: &[(SeverityClass, &[&str])] = &[
    (SeverityClass::Good, &["running", "active"]),
    (SeverityClass::Critical, &["error", "failure", "failed"]),
    (SeverityClass::Warning, &["starting", "loading"]),
];

/// Map a utilization percentage to a class.
///
/// Boundary values resolve to the higher tier: 90 is critical, 70 is warning.
#[must_use]
pub fn classify_percent(percent: u8) -> SeverityClass {
    if percent >= 90 {
        SeverityClass::Critical
    } else if percent >= 70 {
        SeverityClass::Warning
    } else {
        SeverityClass::Good
    }
}

/// Classify a status string by case-insensitive substring search against the
/// keyword table. Returns `None` when nothing matches.
#[must_use]
pub fn classify_status(status: &str) -> Option<SeverityClass> {
    let lowered = status.to_lowercase();
    STATUS_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|word| lowered.contains(word)))
        .map(|(class, _)| *class)
}
