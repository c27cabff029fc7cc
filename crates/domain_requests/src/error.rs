//! Request domain errors

use thiserror::Error;

/// Errors produced by the status state machine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl RequestError {
    pub fn invalid_transition(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        RequestError::InvalidTransition {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}
