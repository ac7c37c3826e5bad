//! Error handling and exit codes.

use launchview_core::UsernameError;

/// Process exit codes.
pub mod exit_codes {
    pub const ERROR_GENERIC: i32 = 1;
    pub const ERROR_CONFIG: i32 = 4;
}

/// Map an error from `app::run` to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<UsernameError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}
