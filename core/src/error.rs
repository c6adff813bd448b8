use thiserror::Error;

/// Everything that can go wrong between a raw sensor package and a summary.
/// All failures are synchronous and final; nothing here is retryable.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    #[error("{code} package expects {expected} values, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("bad package payload: {0}")]
    Json(#[from] serde_json::Error),
}
