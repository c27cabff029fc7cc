//! Compensation policy configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::{Currency, Money};

/// Named constants driving ledger derivation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompensationPolicy {
    /// Flat amount owed per unpaid compensable case
    pub per_case_rate: Money,
    /// When a lawyer has no case in a compensable status, fall back to
    /// all of their cases instead of reporting zero. The fallback is a
    /// logged degradation path for inconsistent status data.
    pub fallback_to_all_cases: bool,
}

impl Default for CompensationPolicy {
    fn default() -> Self {
        Self {
            per_case_rate: Money::new(Decimal::from(2500), Currency::USD),
            fallback_to_all_cases: true,
        }
    }
}
