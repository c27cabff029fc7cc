//! Settlement domain errors

use thiserror::Error;

use core_kernel::{FailureKind, PortError};
use domain_requests::RequestError;

/// Errors that can occur while executing a settlement operation
///
/// None of these are retryable: the caller corrects its input or
/// re-reads and tries again.
#[derive(Debug, Error)]
pub enum SettlementError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Temporal error: {0}")]
    Temporal(#[from] core_kernel::TemporalError),

    #[error("Storage error: {0}")]
    Storage(PortError),
}

impl SettlementError {
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        SettlementError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn invalid_transition(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        SettlementError::InvalidTransition {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Classification for the HTTP collaborator's status-code mapping
    pub fn kind(&self) -> FailureKind {
        match self {
            SettlementError::NotFound { .. } => FailureKind::NotFound,
            SettlementError::InvalidTransition { .. } => FailureKind::InvalidTransition,
            SettlementError::MissingField(_) => FailureKind::MissingField,
            SettlementError::Temporal(_) | SettlementError::Storage(_) => FailureKind::Storage,
        }
    }
}

impl From<RequestError> for SettlementError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::InvalidTransition { from, to } => {
                SettlementError::InvalidTransition { from, to }
            }
            RequestError::MissingField(field) => SettlementError::MissingField(field),
        }
    }
}

impl From<PortError> for SettlementError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { entity_type, id } => SettlementError::NotFound {
                entity: entity_type,
                id,
            },
            other => SettlementError::Storage(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_conversion() {
        let err: SettlementError = RequestError::MissingField("rejectionReason").into();
        assert!(matches!(err, SettlementError::MissingField("rejectionReason")));
        assert_eq!(err.kind(), FailureKind::MissingField);
    }

    #[test]
    fn test_port_not_found_becomes_domain_not_found() {
        let err: SettlementError = PortError::not_found("ServiceRequest", "SRQ-1").into();
        assert_eq!(err.kind(), FailureKind::NotFound);
    }

    #[test]
    fn test_other_port_errors_are_storage() {
        let err: SettlementError = PortError::internal("pool exhausted").into();
        assert_eq!(err.kind(), FailureKind::Storage);
    }
}
