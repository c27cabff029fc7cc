//! Settlement Domain - executing transitions end-to-end
//!
//! The [`SettlementCoordinator`] is the single write path for request
//! status changes. For each operation it:
//!
//! 1. loads the request through the [`SettlementStore`] port,
//! 2. consults the pure state machine in `domain_requests`,
//! 3. stamps approval/rejection metadata and derived terms
//!    (package expiry, aid validity, follow-up dates),
//! 4. persists with a compare-and-swap on the source status, so that of
//!    two racing callers exactly one wins and the loser observes an
//!    invalid transition,
//! 5. applies the returned payment effects best-effort: a payment-side
//!    failure is logged as a warning while the status mutation stands.
//!
//! The administrative override for financial-aid statuses is a separate,
//! unguarded operation that performs no payment sync.

pub mod payment;
pub mod package;
pub mod terms;
pub mod policy;
pub mod ports;
pub mod coordinator;
pub mod error;

pub use payment::{PaymentTransaction, PaymentStatus, PaymentReference};
pub use package::{ServicePackage, PackageDuration};
pub use terms::AidApprovalInput;
pub use policy::SettlementPolicy;
pub use ports::SettlementStore;
pub use coordinator::SettlementCoordinator;
pub use error::SettlementError;
