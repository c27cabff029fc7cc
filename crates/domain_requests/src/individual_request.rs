//! Individual (à-la-carte) service request aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{
    Actor, AdminId, ClientId, IndividualServiceId, IndividualServiceRequestId, LawyerId,
    PaymentTransactionId,
};

/// Individual service request status
///
/// `InProgress` and `Completed` are reached after approval through case
/// handling outside this core; they are representable so downstream
/// reporting can count them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndividualServiceRequestStatus {
    Processing,
    Approved,
    Rejected,
    InProgress,
    Completed,
}

/// A client's request for a single à-la-carte service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualServiceRequest {
    /// Unique identifier
    pub id: IndividualServiceRequestId,
    /// Requesting client
    pub client_id: ClientId,
    /// Service being purchased
    pub service_id: IndividualServiceId,
    /// Lawyer assigned at approval time, if any
    pub assigned_lawyer: Option<LawyerId>,
    /// Status
    pub status: IndividualServiceRequestStatus,
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
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl IndividualServiceRequest {
    /// Creates a new request in `Processing`
    pub fn new(client_id: ClientId, service_id: IndividualServiceId, now: DateTime<Utc>) -> Self {
        Self {
            id: IndividualServiceRequestId::new_v7(),
            client_id,
            service_id,
            assigned_lawyer: None,
            status: IndividualServiceRequestStatus::Processing,
            payment_transaction: None,
            approved_by: None,
            approval_notes: None,
            approved_date: None,
            rejected_by: None,
            rejection_reason: None,
            rejected_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Links the payment transaction opened at purchase time
    pub fn with_payment_transaction(mut self, payment_id: PaymentTransactionId) -> Self {
        self.payment_transaction = Some(payment_id);
        self
    }

    /// Stamps approval metadata, optionally assigning a lawyer
    ///
    /// The caller validates the transition and resolves the lawyer
    /// reference before calling.
    pub fn record_approval(
        &mut self,
        actor: Actor,
        notes: Option<String>,
        assigned_lawyer: Option<LawyerId>,
        now: DateTime<Utc>,
    ) {
        self.status = IndividualServiceRequestStatus::Approved;
        self.approved_by = Some(actor.id);
        self.approval_notes = notes;
        self.approved_date = Some(now);
        if assigned_lawyer.is_some() {
            self.assigned_lawyer = assigned_lawyer;
        }
        self.updated_at = now;
    }

    /// Stamps rejection metadata
    pub fn record_rejection(&mut self, actor: Actor, reason: String, now: DateTime<Utc>) {
        self.status = IndividualServiceRequestStatus::Rejected;
        self.rejected_by = Some(actor.id);
        self.rejection_reason = Some(reason);
        self.rejected_date = Some(now);
        self.updated_at = now;
    }
}
