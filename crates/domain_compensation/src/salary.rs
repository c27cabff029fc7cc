//! Lawyer salary ledger entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{Actor, AdminId, CaseId, LawyerId, Money, SalaryEntryId};

/// Payment status of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryPaymentStatus {
    Unpaid,
    Processing,
    Paid,
}

/// One compensation payment to one lawyer for one case
///
/// At most one entry exists per (lawyer, case) pair; the storage layer
/// enforces this as a unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawyerSalary {
    /// Unique identifier
    pub id: SalaryEntryId,
    /// Lawyer being compensated
    pub lawyer_id: LawyerId,
    /// Case the compensation is for
    pub case_id: CaseId,
    /// Amount paid
    pub amount: Money,
    /// Payment status
    pub status: SalaryPaymentStatus,
    /// When paid
    pub paid_at: Option<DateTime<Utc>>,
    /// Who recorded the payment
    pub paid_by: Option<AdminId>,
    /// Globally unique payment reference, time-sortable
    pub transaction_ref: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl LawyerSalary {
    /// Creates a paid entry, generating the payment reference
    pub fn paid(
        lawyer_id: LawyerId,
        case_id: CaseId,
        amount: Money,
        actor: Actor,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SalaryEntryId::new_v7(),
            lawyer_id,
            case_id,
            amount,
            status: SalaryPaymentStatus::Paid,
            paid_at: Some(now),
            paid_by: Some(actor.id),
            transaction_ref: generate_transaction_ref(),
            created_at: now,
        }
    }
}

/// Payment reference: a millisecond-sortable prefix with a random suffix
/// (UUIDv7). Global uniqueness is additionally enforced by the storage
/// layer, not by generation entropy alone.
fn generate_transaction_ref() -> String {
    format!("TXN-{}", Uuid::now_v7())
}
