//! Derived approval terms
//!
//! Pure functions of (now, inputs) so every derived date is exact under
//! test: package expiry from the billing duration, financial-aid grant
//! terms with their defaults, and follow-up scheduling.

use chrono::{DateTime, Utc};

use core_kernel::temporal::{add_calendar_months, add_calendar_years, add_days, TemporalError};
use core_kernel::{Money, Rate};
use domain_requests::{ApprovalDetails, FinancialAidRequest, PaymentPlan};

use crate::package::PackageDuration;
use crate::policy::SettlementPolicy;

/// Expiry for an approved package purchase
///
/// Monthly packages lapse one calendar month after approval, yearly
/// packages one calendar year after; one-time purchases never expire.
pub fn package_expiry(
    now: DateTime<Utc>,
    duration: PackageDuration,
) -> Result<Option<DateTime<Utc>>, TemporalError> {
    match duration {
        PackageDuration::Monthly => Ok(Some(add_calendar_months(now, 1)?)),
        PackageDuration::Yearly => Ok(Some(add_calendar_years(now, 1)?)),
        PackageDuration::OneTime => Ok(None),
    }
}

/// When a requires-more-info follow-up falls due
pub fn follow_up_date(
    now: DateTime<Utc>,
    policy: &SettlementPolicy,
) -> Result<DateTime<Utc>, TemporalError> {
    add_days(now, policy.follow_up_days)
}

/// Caller-supplied approval terms; unset fields take their defaults from
/// the request and the settlement policy
#[derive(Debug, Clone, Default)]
pub struct AidApprovalInput {
    pub approved_amount: Option<Money>,
    pub approved_discount: Option<Rate>,
    pub payment_plan: Option<PaymentPlan>,
    pub conditions: Vec<String>,
    pub valid_until: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Resolves the granted terms for an aid approval
///
/// Defaults: approved amount = requested amount, approved discount =
/// requested discount, validity = now + the policy window.
pub fn resolve_aid_terms(
    req: &FinancialAidRequest,
    input: &AidApprovalInput,
    now: DateTime<Utc>,
    policy: &SettlementPolicy,
) -> Result<ApprovalDetails, TemporalError> {
    let valid_until = match input.valid_until {
        Some(date) => date,
        None => add_days(now, policy.aid_validity_days)?,
    };

    Ok(ApprovalDetails {
        approved_amount: input.approved_amount.unwrap_or(req.requested_amount),
        approved_discount: input.approved_discount.unwrap_or(req.discount_percentage),
        payment_plan: input.payment_plan.unwrap_or(PaymentPlan::FullPayment),
        conditions: input.conditions.clone(),
        valid_until,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_kernel::{ClientId, Currency};
    use domain_requests::{AidPriority, AidRequestType};
    use rust_decimal_macros::dec;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 14, 0, 0).unwrap()
    }

    fn aid_request() -> FinancialAidRequest {
        FinancialAidRequest::new(
            ClientId::new(),
            AidRequestType::MonthlyPackage,
            Money::new(dec!(900), Currency::USD),
            Rate::from_percentage(dec!(60)),
            AidPriority::High,
            utc(2025, 1, 1),
        )
    }

    #[test]
    fn test_monthly_expiry_is_one_calendar_month() {
        let expiry = package_expiry(utc(2025, 3, 15), PackageDuration::Monthly).unwrap();
        assert_eq!(expiry, Some(utc(2025, 4, 15)));
    }

    #[test]
    fn test_yearly_expiry_is_one_calendar_year() {
        let expiry = package_expiry(utc(2025, 3, 15), PackageDuration::Yearly).unwrap();
        assert_eq!(expiry, Some(utc(2026, 3, 15)));
    }

    #[test]
    fn test_one_time_never_expires() {
        let expiry = package_expiry(utc(2025, 3, 15), PackageDuration::OneTime).unwrap();
        assert_eq!(expiry, None);
    }

    #[test]
    fn test_aid_terms_default_from_request() {
        let req = aid_request();
        let now = utc(2025, 2, 1);
        let terms =
            resolve_aid_terms(&req, &AidApprovalInput::default(), now, &SettlementPolicy::default())
                .unwrap();

        assert_eq!(terms.approved_amount, req.requested_amount);
        assert_eq!(terms.approved_discount, req.discount_percentage);
        assert_eq!(terms.payment_plan, PaymentPlan::FullPayment);
        assert_eq!(terms.valid_until, utc(2025, 3, 3));
    }

    #[test]
    fn test_aid_terms_caller_overrides_win() {
        let req = aid_request();
        let input = AidApprovalInput {
            approved_amount: Some(Money::new(dec!(450), Currency::USD)),
            approved_discount: Some(Rate::from_percentage(dec!(25))),
            payment_plan: Some(PaymentPlan::Installments(3)),
            conditions: vec!["submit income statement quarterly".into()],
            valid_until: Some(utc(2025, 6, 30)),
            notes: None,
        };

        let terms =
            resolve_aid_terms(&req, &input, utc(2025, 2, 1), &SettlementPolicy::default()).unwrap();

        assert_eq!(terms.approved_amount.amount(), dec!(450));
        assert_eq!(terms.approved_discount, Rate::from_percentage(dec!(25)));
        assert_eq!(terms.payment_plan, PaymentPlan::Installments(3));
        assert_eq!(terms.valid_until, utc(2025, 6, 30));
        assert_eq!(terms.conditions.len(), 1);
    }

    #[test]
    fn test_follow_up_is_policy_days_out() {
        let due = follow_up_date(utc(2025, 5, 1), &SettlementPolicy::default()).unwrap();
        assert_eq!(due, utc(2025, 5, 8));
    }
}
