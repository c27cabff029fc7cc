//! Request Domain - the three client-facing request kinds
//!
//! This crate defines the entities a client's ask for a paid or subsidized
//! legal service flows through, together with the pure status state machine
//! that governs them:
//!
//! - **ServiceRequest**: a fixed-package purchase
//! - **IndividualServiceRequest**: an à-la-carte service, optionally with a
//!   lawyer assignment on approval
//! - **FinancialAidRequest**: a subsidy ask, reviewed with its own richer
//!   status set
//!
//! The state machine in [`transitions`] is pure: it validates legality and
//! returns the new status plus a list of [`SettlementEffect`] descriptors.
//! Applying those effects (payment-transaction sync, persistence) is the
//! settlement coordinator's job, which keeps transition logic testable
//! without a storage dependency.

pub mod service_request;
pub mod individual_request;
pub mod financial_aid;
pub mod transitions;
pub mod error;

pub use service_request::{ServiceRequest, ServiceRequestStatus};
pub use individual_request::{IndividualServiceRequest, IndividualServiceRequestStatus};
pub use financial_aid::{
    FinancialAidRequest, FinancialAidStatus, AidRequestType, AidPriority,
    ApprovalDetails, AdminResponse, PaymentPlan,
};
pub use transitions::{SettlementEffect, Transition};
pub use error::RequestError;
