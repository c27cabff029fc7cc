//! Package service request aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{
    Actor, AdminId, ClientId, PaymentTransactionId, ServicePackageId, ServiceRequestId,
};

/// Service request status
///
/// The workflow core only drives `Processing -> Approved` and
/// `Processing -> Rejected`. `Active` and `Expired` are produced by
/// external aging of approved requests and are representable here so the
/// read side can report on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceRequestStatus {
    Processing,
    Approved,
    Rejected,
    Active,
    Expired,
}

/// A client's request to purchase a fixed service package
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Unique identifier
    pub id: ServiceRequestId,
    /// Requesting client
    pub client_id: ClientId,
    /// Package being purchased
    pub package_id: ServicePackageId,
    /// Status
    pub status: ServiceRequestStatus,
    /// Linked payment transaction, if one was opened at purchase time
    pub payment_transaction: Option<PaymentTransactionId>,
    /// Who approved
    pub approved_by: Option<AdminId>,
    /// Approval notes
    pub approval_notes: Option<String>,
    /// When approved
    pub approved_date: Option<DateTime<Utc>>,
    /// Who rejected
    pub rejected_by: Option<AdminId>,
    /// Why rejected
    pub rejection_reason: Option<String>,
    /// When rejected
    pub rejected_date: Option<DateTime<Utc>>,
    /// When the approved package lapses (set from the package duration)
    pub expiry_date: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl ServiceRequest {
    /// Creates a new request in `Processing`
    pub fn new(client_id: ClientId, package_id: ServicePackageId, now: DateTime<Utc>) -> Self {
        Self {
            id: ServiceRequestId::new_v7(),
            client_id,
            package_id,
            status: ServiceRequestStatus::Processing,
            payment_transaction: None,
            approved_by: None,
            approval_notes: None,
            approved_date: None,
            rejected_by: None,
            rejection_reason: None,
            rejected_date: None,
            expiry_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Links the payment transaction opened at purchase time
    pub fn with_payment_transaction(mut self, payment_id: PaymentTransactionId) -> Self {
        self.payment_transaction = Some(payment_id);
        self
    }

    /// Stamps approval metadata
    ///
    /// Invariant: approval fields are set iff status is `Approved`. The
    /// caller validates the transition through the state machine first.
    pub fn record_approval(
        &mut self,
        actor: Actor,
        notes: Option<String>,
        expiry_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) {
        self.status = ServiceRequestStatus::Approved;
        self.approved_by = Some(actor.id);
        self.approval_notes = notes;
        self.approved_date = Some(now);
        self.expiry_date = expiry_date;
        self.updated_at = now;
    }

    /// Stamps rejection metadata
    pub fn record_rejection(&mut self, actor: Actor, reason: String, now: DateTime<Utc>) {
        self.status = ServiceRequestStatus::Rejected;
        self.rejected_by = Some(actor.id);
        self.rejection_reason = Some(reason);
        self.rejected_date = Some(now);
        self.updated_at = now;
    }
}
