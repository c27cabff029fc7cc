//! Compensation Domain - what the platform owes its lawyers
//!
//! Derives, per lawyer, the set of cases that generate a compensation
//! obligation and the amount still owed, reconciled against the salary
//! ledger so no case is ever paid twice. The ledger's write path is
//! [`CompensationCalculator::pay_lawyer`], which records a payment behind
//! the storage layer's (lawyer, case) unique constraint.

pub mod case;
pub mod salary;
pub mod policy;
pub mod ports;
pub mod ledger;
pub mod error;

pub use case::{Case, CaseStatus, Lawyer};
pub use salary::{LawyerSalary, SalaryPaymentStatus};
pub use policy::CompensationPolicy;
pub use ports::CompensationStore;
pub use ledger::{CaseCompensation, CompensationCalculator, LawyerLedger};
pub use error::CompensationError;
