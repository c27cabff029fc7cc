//! Revenue projections
//!
//! Revenue counts only completed payment transactions, attributed to the
//! calendar month the payment completed in.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::{Currency, Money};
use domain_settlement::{PaymentStatus, PaymentTransaction};

/// Total of all completed payments
pub fn total_revenue(payments: &[PaymentTransaction], currency: Currency) -> Money {
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed)
        .fold(Money::zero(currency), |acc, p| acc + p.amount)
}

/// Completed-payment total for one calendar month
pub fn revenue_for_month(
    payments: &[PaymentTransaction],
    year: i32,
    month: u32,
    currency: Currency,
) -> Money {
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed)
        .filter(|p| {
            p.completed_at
                .map(|at| at.year() == year && at.month() == month)
                .unwrap_or(false)
        })
        .fold(Money::zero(currency), |acc, p| acc + p.amount)
}

/// Month-over-month growth as a percentage
///
/// Zero when the prior month had no revenue, so a cold start never
/// reports infinite growth.
pub fn growth_percent(last_month: Money, this_month: Money) -> Decimal {
    if last_month.amount().is_zero() {
        return Decimal::ZERO;
    }
    (this_month.amount() - last_month.amount()) / last_month.amount() * dec!(100)
}

/// This month vs. last month, relative to a reference instant
#[derive(Debug, Clone, Serialize)]
pub struct RevenueSummary {
    pub total: Money,
    pub this_month: Money,
    pub last_month: Money,
    pub growth_percent: Decimal,
}

impl RevenueSummary {
    pub fn compute(
        payments: &[PaymentTransaction],
        now: DateTime<Utc>,
        currency: Currency,
    ) -> Self {
        let (this_year, this_month) = (now.year(), now.month());
        let (last_year, last_month) = if this_month == 1 {
            (this_year - 1, 12)
        } else {
            (this_year, this_month - 1)
        };

        let this_month_revenue = revenue_for_month(payments, this_year, this_month, currency);
        let last_month_revenue = revenue_for_month(payments, last_year, last_month, currency);

        Self {
            total: total_revenue(payments, currency),
            growth_percent: growth_percent(last_month_revenue, this_month_revenue),
            this_month: this_month_revenue,
            last_month: last_month_revenue,
        }
    }
}
