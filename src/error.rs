use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid daily budget: {value} (must be a positive number of seconds)")]
    InvalidBudget { value: i64 },

    #[error("Invalid refresh interval: {value} (must be at least 1 second)")]
    InvalidInterval { value: u64 },

    #[error("Tray support not compiled in. Rebuild with `--features tray`.")]
    TrayUnavailable,

    #[cfg_attr(not(feature = "tray"), allow(dead_code))]
    #[error("Tray error: {0}")]
    Tray(String),

    #[error("Failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
