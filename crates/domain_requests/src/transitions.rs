//! Status state machine
//!
//! Pure transition logic for the three request kinds. Every guarded
//! operation validates the source status and required inputs, then returns
//! the target status together with the side effects the settlement layer
//! must apply. Nothing here performs I/O or mutates an entity.

use serde::{Deserialize, Serialize};

use core_kernel::PaymentTransactionId;

use crate::error::RequestError;
use crate::financial_aid::{FinancialAidRequest, FinancialAidStatus};
use crate::individual_request::{IndividualServiceRequest, IndividualServiceRequestStatus};
use crate::service_request::{ServiceRequest, ServiceRequestStatus};

/// A cross-entity side effect of a status transition
///
/// Effects are descriptors, not actions: the settlement coordinator
/// applies them against storage after the status mutation commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementEffect {
    /// Mark the linked payment transaction completed
    CompletePayment { payment_id: PaymentTransactionId },
    /// Mark the linked payment transaction failed, recording why
    FailPayment {
        payment_id: PaymentTransactionId,
        reason: String,
    },
}

/// Outcome of a legal transition: the target status plus effects to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S> {
    pub to: S,
    pub effects: Vec<SettlementEffect>,
}

impl<S> Transition<S> {
    fn clean(to: S) -> Self {
        Self { to, effects: vec![] }
    }

    fn with_effects(to: S, effects: Vec<SettlementEffect>) -> Self {
        Self { to, effects }
    }
}

// ---------------------------------------------------------------------------
// Package service requests
// ---------------------------------------------------------------------------

/// `Processing -> Approved`; completes the linked payment if present.
pub fn approve_service_request(
    req: &ServiceRequest,
) -> Result<Transition<ServiceRequestStatus>, RequestError> {
    if req.status != ServiceRequestStatus::Processing {
        return Err(RequestError::invalid_transition(
            req.status,
            ServiceRequestStatus::Approved,
        ));
    }

    let effects = req
        .payment_transaction
        .map(|payment_id| vec![SettlementEffect::CompletePayment { payment_id }])
        .unwrap_or_default();

    Ok(Transition::with_effects(ServiceRequestStatus::Approved, effects))
}

/// `Processing -> Rejected`; requires a reason.
///
/// Package rejection deliberately leaves the payment transaction alone:
/// only individual-service rejection fails the payment.
pub fn reject_service_request(
    req: &ServiceRequest,
    reason: &str,
) -> Result<Transition<ServiceRequestStatus>, RequestError> {
    if reason.trim().is_empty() {
        return Err(RequestError::MissingField("rejectionReason"));
    }
    if req.status != ServiceRequestStatus::Processing {
        return Err(RequestError::invalid_transition(
            req.status,
            ServiceRequestStatus::Rejected,
        ));
    }

    Ok(Transition::clean(ServiceRequestStatus::Rejected))
}

// ---------------------------------------------------------------------------
// Individual service requests
// ---------------------------------------------------------------------------

/// `Processing -> Approved`; completes the linked payment if present.
pub fn approve_individual_request(
    req: &IndividualServiceRequest,
) -> Result<Transition<IndividualServiceRequestStatus>, RequestError> {
    if req.status != IndividualServiceRequestStatus::Processing {
        return Err(RequestError::invalid_transition(
            req.status,
            IndividualServiceRequestStatus::Approved,
        ));
    }

    let effects = req
        .payment_transaction
        .map(|payment_id| vec![SettlementEffect::CompletePayment { payment_id }])
        .unwrap_or_default();

    Ok(Transition::with_effects(
        IndividualServiceRequestStatus::Approved,
        effects,
    ))
}

/// `Processing -> Rejected`; requires a reason and fails the linked
/// payment with it.
pub fn reject_individual_request(
    req: &IndividualServiceRequest,
    reason: &str,
) -> Result<Transition<IndividualServiceRequestStatus>, RequestError> {
    if reason.trim().is_empty() {
        return Err(RequestError::MissingField("rejectionReason"));
    }
    if req.status != IndividualServiceRequestStatus::Processing {
        return Err(RequestError::invalid_transition(
            req.status,
            IndividualServiceRequestStatus::Rejected,
        ));
    }

    let effects = req
        .payment_transaction
        .map(|payment_id| {
            vec![SettlementEffect::FailPayment {
                payment_id,
                reason: reason.to_string(),
            }]
        })
        .unwrap_or_default();

    Ok(Transition::with_effects(
        IndividualServiceRequestStatus::Rejected,
        effects,
    ))
}

// ---------------------------------------------------------------------------
// Financial-aid requests
// ---------------------------------------------------------------------------

/// Statuses an aid request can be decided (approved/rejected) from
const REVIEWABLE: [FinancialAidStatus; 3] = [
    FinancialAidStatus::Pending,
    FinancialAidStatus::UnderReview,
    FinancialAidStatus::RequiresMoreInfo,
];

/// Statuses an information request can be raised from
const INFO_REQUESTABLE: [FinancialAidStatus; 2] =
    [FinancialAidStatus::Pending, FinancialAidStatus::UnderReview];

/// `{Pending, UnderReview, RequiresMoreInfo} -> Approved`
pub fn approve_financial_aid(
    req: &FinancialAidRequest,
) -> Result<Transition<FinancialAidStatus>, RequestError> {
    if !REVIEWABLE.contains(&req.status) {
        return Err(RequestError::invalid_transition(
            req.status,
            FinancialAidStatus::Approved,
        ));
    }
    Ok(Transition::clean(FinancialAidStatus::Approved))
}

/// `{Pending, UnderReview, RequiresMoreInfo} -> Rejected`; requires a reason.
pub fn reject_financial_aid(
    req: &FinancialAidRequest,
    reason: &str,
) -> Result<Transition<FinancialAidStatus>, RequestError> {
    if reason.trim().is_empty() {
        return Err(RequestError::MissingField("reviewNotes"));
    }
    if !REVIEWABLE.contains(&req.status) {
        return Err(RequestError::invalid_transition(
            req.status,
            FinancialAidStatus::Rejected,
        ));
    }
    Ok(Transition::clean(FinancialAidStatus::Rejected))
}

/// `{Pending, UnderReview} -> RequiresMoreInfo`; requires a message.
pub fn request_more_info(
    req: &FinancialAidRequest,
    message: &str,
) -> Result<Transition<FinancialAidStatus>, RequestError> {
    if message.trim().is_empty() {
        return Err(RequestError::MissingField("message"));
    }
    if !INFO_REQUESTABLE.contains(&req.status) {
        return Err(RequestError::invalid_transition(
            req.status,
            FinancialAidStatus::RequiresMoreInfo,
        ));
    }
    Ok(Transition::clean(FinancialAidStatus::RequiresMoreInfo))
}

/// Administrative override: any status from any source, no side effects.
///
/// This bypasses the guarded operations above and performs no payment
/// sync. It exists as a distinct escape hatch; keep it out of ordinary
/// review flows.
pub fn override_status(to: FinancialAidStatus) -> Transition<FinancialAidStatus> {
    Transition::clean(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use core_kernel::{ClientId, Currency, IndividualServiceId, Money, Rate, ServicePackageId};
    use rust_decimal_macros::dec;

    use crate::financial_aid::{AidPriority, AidRequestType};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
    }

    fn service_request() -> ServiceRequest {
        ServiceRequest::new(ClientId::new(), ServicePackageId::new(), now())
    }

    fn individual_request() -> IndividualServiceRequest {
        IndividualServiceRequest::new(ClientId::new(), IndividualServiceId::new(), now())
    }

    fn aid_request(status: FinancialAidStatus) -> FinancialAidRequest {
        let mut req = FinancialAidRequest::new(
            ClientId::new(),
            AidRequestType::MonthlyPackage,
            Money::new(dec!(500), Currency::USD),
            Rate::from_percentage(dec!(30)),
            AidPriority::Medium,
            now(),
        );
        req.status = status;
        req
    }

    #[test]
    fn test_approve_from_processing_without_payment() {
        let req = service_request();
        let t = approve_service_request(&req).unwrap();
        assert_eq!(t.to, ServiceRequestStatus::Approved);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_approve_from_processing_completes_payment() {
        let payment_id = core_kernel::PaymentTransactionId::new();
        let req = service_request().with_payment_transaction(payment_id);

        let t = approve_service_request(&req).unwrap();
        assert_eq!(t.effects, vec![SettlementEffect::CompletePayment { payment_id }]);
    }

    #[test]
    fn test_approve_from_approved_is_illegal() {
        let mut req = service_request();
        req.status = ServiceRequestStatus::Approved;

        let err = approve_service_request(&req).unwrap_err();
        assert!(matches!(err, RequestError::InvalidTransition { .. }));
    }

    #[test]
    fn test_reject_requires_reason() {
        let req = service_request();
        assert_eq!(
            reject_service_request(&req, "  ").unwrap_err(),
            RequestError::MissingField("rejectionReason")
        );
    }

    #[test]
    fn test_package_rejection_does_not_touch_payment() {
        let payment_id = core_kernel::PaymentTransactionId::new();
        let req = service_request().with_payment_transaction(payment_id);

        let t = reject_service_request(&req, "duplicate purchase").unwrap();
        assert_eq!(t.to, ServiceRequestStatus::Rejected);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_individual_rejection_fails_payment_with_reason() {
        let payment_id = core_kernel::PaymentTransactionId::new();
        let req = individual_request().with_payment_transaction(payment_id);

        let t = reject_individual_request(&req, "card declined").unwrap();
        assert_eq!(
            t.effects,
            vec![SettlementEffect::FailPayment {
                payment_id,
                reason: "card declined".to_string(),
            }]
        );
    }

    #[test]
    fn test_individual_approve_from_completed_is_illegal() {
        let mut req = individual_request();
        req.status = IndividualServiceRequestStatus::Completed;

        assert!(approve_individual_request(&req).is_err());
    }

    #[test]
    fn test_aid_approval_from_each_reviewable_status() {
        for status in REVIEWABLE {
            let req = aid_request(status);
            let t = approve_financial_aid(&req).unwrap();
            assert_eq!(t.to, FinancialAidStatus::Approved);
            assert!(t.effects.is_empty());
        }
    }

    #[test]
    fn test_aid_approval_from_terminal_statuses_is_illegal() {
        for status in [FinancialAidStatus::Approved, FinancialAidStatus::Rejected] {
            let req = aid_request(status);
            assert!(approve_financial_aid(&req).is_err());
        }
    }

    #[test]
    fn test_info_request_not_allowed_from_requires_more_info() {
        let req = aid_request(FinancialAidStatus::RequiresMoreInfo);
        assert!(matches!(
            request_more_info(&req, "still need the ID copy"),
            Err(RequestError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_info_request_requires_message() {
        let req = aid_request(FinancialAidStatus::Pending);
        assert_eq!(
            request_more_info(&req, "").unwrap_err(),
            RequestError::MissingField("message")
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rejection_reason_must_carry_content(reason in "\\s*") {
                let req = service_request();
                prop_assert_eq!(
                    reject_service_request(&req, &reason).unwrap_err(),
                    RequestError::MissingField("rejectionReason")
                );
            }

            #[test]
            fn any_nonblank_reason_rejects_from_processing(reason in "[a-z ]*[a-z][a-z ]*") {
                let req = individual_request();
                let t = reject_individual_request(&req, &reason).unwrap();
                prop_assert_eq!(t.to, IndividualServiceRequestStatus::Rejected);
            }
        }
    }

    #[test]
    fn test_override_accepts_any_source_and_emits_nothing() {
        for from in [
            FinancialAidStatus::Pending,
            FinancialAidStatus::UnderReview,
            FinancialAidStatus::Approved,
            FinancialAidStatus::Rejected,
            FinancialAidStatus::RequiresMoreInfo,
        ] {
            let _req = aid_request(from);
            let t = override_status(FinancialAidStatus::UnderReview);
            assert_eq!(t.to, FinancialAidStatus::UnderReview);
            assert!(t.effects.is_empty());
        }
    }
}
