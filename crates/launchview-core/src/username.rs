//! Offline player-name validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// 3-16 letters, digits or underscores: the offline account rule.
static VALID_USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9_]{3,16}$").expect("username pattern is valid"));

/// Why a player name was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("a player name is required")]
    Required,
    #[error("player names are 3-16 letters, digits or underscores")]
    Invalid,
}

/// Validate an offline player name.
pub fn validate(name: &str) -> Result<(), UsernameError> {
    if name.is_empty() {
        return Err(UsernameError::Required);
    }
    if !VALID_USERNAME.is_match(name) {
        return Err(UsernameError::Invalid);
    }
    Ok(())
}
