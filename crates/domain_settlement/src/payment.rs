//! Payment transaction records
//!
//! Payment capture happens upstream; within this core a transaction's
//! lifecycle is driven entirely by request approval/rejection side
//! effects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClientId, IndividualServiceId, Money, PaymentTransactionId, ServicePackageId};

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting the outcome of the linked request
    Pending,
    /// Settled on request approval
    Completed,
    /// Failed on request rejection
    Failed,
}

/// What the payment was taken for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentReference {
    Package(ServicePackageId),
    IndividualService(IndividualServiceId),
}

/// A payment record linked to at most one request at a time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentTransaction {
    /// Unique identifier
    pub id: PaymentTransactionId,
    /// Paying client
    pub client_id: ClientId,
    /// What was purchased
    pub reference: PaymentReference,
    /// Amount
    pub amount: Money,
    /// Status
    pub status: PaymentStatus,
    /// Why the payment failed, when it did
    pub failure_reason: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
    /// When status changed to completed
    pub completed_at: Option<DateTime<Utc>>,
}

impl PaymentTransaction {
    /// Creates a new pending payment
    pub fn new(
        client_id: ClientId,
        reference: PaymentReference,
        amount: Money,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: PaymentTransactionId::new_v7(),
            client_id,
            reference,
            amount,
            status: PaymentStatus::Pending,
            failure_reason: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Marks the payment as completed
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.status = PaymentStatus::Completed;
        self.completed_at = Some(now);
        self.updated_at = now;
    }

    /// Marks the payment as failed
    pub fn fail(&mut self, reason: impl Into<String>, now: DateTime<Utc>) {
        self.status = PaymentStatus::Failed;
        self.failure_reason = Some(reason.into());
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
    }

    fn payment() -> PaymentTransaction {
        PaymentTransaction::new(
            ClientId::new(),
            PaymentReference::Package(ServicePackageId::new()),
            Money::new(dec!(299), Currency::USD),
            now(),
        )
    }

    #[test]
    fn test_new_payment_is_pending() {
        let p = payment();
        assert_eq!(p.status, PaymentStatus::Pending);
        assert!(p.completed_at.is_none());
        assert!(p.failure_reason.is_none());
    }

    #[test]
    fn test_complete_stamps_timestamp() {
        let mut p = payment();
        p.complete(now());
        assert_eq!(p.status, PaymentStatus::Completed);
        assert_eq!(p.completed_at, Some(now()));
    }

    #[test]
    fn test_fail_records_reason() {
        let mut p = payment();
        p.fail("request rejected: duplicate purchase", now());
        assert_eq!(p.status, PaymentStatus::Failed);
        assert_eq!(
            p.failure_reason.as_deref(),
            Some("request rejected: duplicate purchase")
        );
        assert!(p.completed_at.is_none());
    }
}
