//! Test utilities for the back-office suite
//!
//! Builders with sensible defaults, fixed fixtures for deterministic
//! dates and amounts, fake-data generators, and tracing bootstrap.

pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod tracing_init;

pub use builders::{
    usd, CaseBuilder, FinancialAidRequestBuilder, IndividualServiceRequestBuilder,
    PaymentTransactionBuilder, ServiceRequestBuilder,
};
pub use fixtures::{ActorFixtures, MoneyFixtures, TemporalFixtures};
pub use generators::{client_name, lawyer_name};
pub use tracing_init::init_test_tracing;
