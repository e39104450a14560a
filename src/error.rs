//! Error types for the PACE library
//!
//! The synthesis core never fails; these errors come from the layers around it
//! (rule files, answer files, configuration, CLI input).

use thiserror::Error;

/// Errors raised while loading rules, answers or configuration
#[derive(Error, Debug)]
pub enum PaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid condition '{expr}': {reason}")]
    InvalidCondition { expr: String, reason: String },

    #[error("Invalid answer '{input}': expected 'question=value'")]
    InvalidAnswer { input: String },

    #[error("Answer set has {} issue(s): {}", .0.len(), .0.join("; "))]
    InvalidAnswers(Vec<String>),

    #[error("Baseline module '{0}' cannot be disabled")]
    BaselineDisabled(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, PaceError>;
