//! Compensation domain errors

use thiserror::Error;

use core_kernel::{CaseId, FailureKind, LawyerId, PortError};

/// Errors that can occur deriving or writing the compensation ledger
#[derive(Debug, Error)]
pub enum CompensationError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Salary entry already exists for lawyer {lawyer} and case {case}")]
    DuplicatePayment { lawyer: LawyerId, case: CaseId },

    #[error("Storage error: {0}")]
    Storage(PortError),
}

impl CompensationError {
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        CompensationError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Classification for the HTTP collaborator's status-code mapping
    pub fn kind(&self) -> FailureKind {
        match self {
            CompensationError::NotFound { .. } => FailureKind::NotFound,
            CompensationError::DuplicatePayment { .. } => FailureKind::DuplicatePayment,
            CompensationError::Storage(_) => FailureKind::Storage,
        }
    }
}

impl From<PortError> for CompensationError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { entity_type, id } => CompensationError::NotFound {
                entity: entity_type,
                id,
            },
            other => CompensationError::Storage(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_payment_kind() {
        let err = CompensationError::DuplicatePayment {
            lawyer: LawyerId::new(),
            case: CaseId::new(),
        };
        assert_eq!(err.kind(), FailureKind::DuplicatePayment);
    }

    #[test]
    fn test_port_not_found_conversion() {
        let err: CompensationError = PortError::not_found("Case", "CSE-9").into();
        assert_eq!(err.kind(), FailureKind::NotFound);
    }
}
