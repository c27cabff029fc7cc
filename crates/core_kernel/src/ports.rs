//! Collaborator ports shared across domain modules
//!
//! The workflow core talks to three external collaborators, each through a
//! narrow interface defined here or in the owning domain crate:
//!
//! - the **persistence collaborator** (per-domain store traits built on
//!   [`PortError`]),
//! - the **identity collaborator**, which supplies the acting user as an
//!   [`Actor`] on every mutating call; the core records who acted and
//!   never authenticates,
//! - the **activity-log collaborator**, notified fire-and-forget of every
//!   transition and never awaited for correctness.

use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for port operations
///
/// All store implementations surface failures through this type so the
/// domain crates can translate them uniformly.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The operation conflicts with existing data (e.g., a unique
    /// constraint violation)
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
    },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure that may
    /// succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. } | PortError::Timeout { .. }
        )
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error indicates a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Classification of a workflow failure for the HTTP collaborator
///
/// Every coordinator/calculator error maps to exactly one kind; callers
/// translate kinds to status codes deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Referenced entity absent (404-equivalent)
    NotFound,
    /// Illegal status change: stale client view or a lost race
    /// (409-equivalent)
    InvalidTransition,
    /// Caller omitted a required input (400-equivalent)
    MissingField,
    /// (lawyer, case) uniqueness violation (409-equivalent)
    DuplicatePayment,
    /// Persistence collaborator failure (502-equivalent)
    Storage,
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// Role of an acting user, as reported by the identity collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Admin,
    SuperAdmin,
    System,
}

/// The acting user behind a mutating call
///
/// Supplied by the identity collaborator on every mutating operation.
/// The workflow core only records who acted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: crate::identifiers::AdminId,
    pub role: ActorRole,
}

impl Actor {
    pub fn new(id: crate::identifiers::AdminId, role: ActorRole) -> Self {
        Self { id, role }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.id, self.role)
    }
}

/// An activity-log entry describing one workflow action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// What happened, e.g. "service_request.approved"
    pub action: String,
    /// The entity acted upon, as a display string
    pub entity: String,
    /// Who acted
    pub actor: Actor,
    /// Free-form detail (rejection reason, override target, ...)
    pub detail: Option<String>,
}

impl ActivityEvent {
    pub fn new(action: impl Into<String>, entity: impl fmt::Display, actor: Actor) -> Self {
        Self {
            action: action.into(),
            entity: entity.to_string(),
            actor,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Fire-and-forget activity logging
///
/// Implementations must not block the caller; failures to record are the
/// implementation's problem, never the workflow's.
pub trait ActivityLog: Send + Sync {
    fn record(&self, event: ActivityEvent);
}

/// An activity log that drops everything (for callers that opt out)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopActivityLog;

impl ActivityLog for NoopActivityLog {
    fn record(&self, _event: ActivityEvent) {}
}
