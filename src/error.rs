//! Error types for trainmeter

use thiserror::Error;

/// Errors that can occur while building or processing a workout
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Unknown activity code: {0}")]
    UnknownActivityCode(String),

    #[error("Wrong field count for {code}: expected {expected}, got {got}")]
    WrongArity {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Duration must be positive, got {0} h")]
    NonPositiveDuration(f64),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
