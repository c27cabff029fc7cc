//! Fixed fixtures for deterministic tests

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use core_kernel::{Actor, ActorRole, AdminId, Currency, Money, Rate};

static REFERENCE_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap());

/// Deterministic instants
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The suite's canonical "now"
    pub fn reference_now() -> DateTime<Utc> {
        *REFERENCE_NOW
    }

    /// A day in the reference month
    pub fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, 10, 30, 0).unwrap()
    }
}

/// Deterministic amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn package_price() -> Money {
        Money::new(dec!(299), Currency::USD)
    }

    pub fn service_price() -> Money {
        Money::new(dec!(120), Currency::USD)
    }

    pub fn aid_amount() -> Money {
        Money::new(dec!(1500), Currency::USD)
    }

    pub fn aid_discount() -> Rate {
        Rate::from_percentage(dec!(50))
    }

    pub fn per_case_rate() -> Money {
        Money::new(dec!(2500), Currency::USD)
    }
}

/// Acting users
pub struct ActorFixtures;

impl ActorFixtures {
    pub fn admin() -> Actor {
        Actor::new(AdminId::new(), ActorRole::Admin)
    }

    pub fn super_admin() -> Actor {
        Actor::new(AdminId::new(), ActorRole::SuperAdmin)
    }
}
