//! Core Kernel - Foundational types and utilities for the legal-services back office
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Temporal helpers for calendar-exact date derivations
//! - Common identifiers and value objects
//! - Collaborator ports (storage errors, actor identity, activity log)

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, Currency, Rate, MoneyError};
pub use temporal::{Clock, SystemClock, ManualClock, TemporalError};
pub use identifiers::{
    ClientId, LawyerId, AdminId, CaseId,
    ServiceRequestId, IndividualServiceRequestId, FinancialAidRequestId,
    PaymentTransactionId, SalaryEntryId,
    ServicePackageId, IndividualServiceId,
};
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, FailureKind,
    Actor, ActorRole,
    ActivityLog, ActivityEvent,
};
