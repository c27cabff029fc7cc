//! In-memory storage adapter
//!
//! Reference implementation of the persistence collaborator. A real
//! database engine plugs in behind the same port traits; what this
//! adapter pins down is the atomicity contract the workflow relies on:
//!
//! - status updates are compare-and-swap: the stored status is checked
//!   and the write applied under one write lock, so two racing
//!   transitions on the same request cannot both win;
//! - salary-ledger inserts enforce the (lawyer, case) unique constraint
//!   inside the same critical section as the insert, closing the
//!   check-then-insert race.

pub mod memory;
pub mod activity;

pub use memory::MemoryStore;
pub use activity::{RecordingActivityLog, TracingActivityLog};
