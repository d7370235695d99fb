//! Engine error type.
//!
//! Only caller-input problems and broken internal invariants become errors.
//! Search failures (backtracking, domain wipeout, an overcommitted day) are
//! reported through [`ScheduleResult::found_schedule`](crate::models::ScheduleResult).

use thiserror::Error;
use tracing::warn;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced to callers of the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input failed structural validation; every detected problem is listed.
    #[error("invalid input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// A time string was not a valid 24-hour `HH:MM` value.
    #[error("invalid time of day '{value}', expected HH:MM")]
    InvalidTime { value: String },

    /// A preference label is not one of morning/afternoon/evening/night.
    #[error("unknown preference '{0}'")]
    UnknownPreference(String),

    /// A strategy name could not be resolved.
    #[error("unknown scheduling strategy '{0}'")]
    UnknownStrategy(String),

    /// A midnight-split obligation lost its counterpart.
    #[error("split obligation '{name}' is missing its other part")]
    UnpairedSplit { name: String },

    /// Scheduler configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A request body was not valid JSON for its shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Wraps validation errors, logging them once.
    pub fn validation(errors: Vec<ValidationError>) -> Self {
        warn!(
            target: "dayplan::validation",
            count = errors.len(),
            first = %errors.first().map(|e| e.message.as_str()).unwrap_or_default(),
            "input rejected"
        );
        EngineError::Validation(errors)
    }

    /// Whether this error is the caller's fault (as opposed to an internal invariant).
    pub fn is_input_error(&self) -> bool {
        !matches!(self, EngineError::UnpairedSplit { .. })
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
