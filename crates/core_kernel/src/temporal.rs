//! Temporal helpers for calendar-exact date derivations
//!
//! Approval terms in the back office are calendar-based: a monthly package
//! expires one calendar month after approval, aid approvals are valid for a
//! fixed number of days, follow-ups are due a fixed number of days out.
//! These helpers keep that arithmetic in one place, and the [`Clock`]
//! abstraction makes every derived date deterministic under test.

use chrono::{DateTime, Days, Months, Utc};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Date arithmetic out of range: {0}")]
    OutOfRange(String),
}

/// Adds whole calendar months, clamping to the last day of the target month
/// when the source day does not exist (e.g., Jan 31 + 1 month = Feb 28/29).
pub fn add_calendar_months(from: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>, TemporalError> {
    from.checked_add_months(Months::new(months))
        .ok_or_else(|| TemporalError::OutOfRange(format!("{} + {} months", from, months)))
}

/// Adds whole calendar years.
pub fn add_calendar_years(from: DateTime<Utc>, years: u32) -> Result<DateTime<Utc>, TemporalError> {
    from.checked_add_months(Months::new(years * 12))
        .ok_or_else(|| TemporalError::OutOfRange(format!("{} + {} years", from, years)))
}

/// Adds a whole number of days.
pub fn add_days(from: DateTime<Utc>, days: u64) -> Result<DateTime<Utc>, TemporalError> {
    from.checked_add_days(Days::new(days))
        .ok_or_else(|| TemporalError::OutOfRange(format!("{} + {} days", from, days)))
}

/// Source of the current time
///
/// Coordinators take their "now" from a `Clock` so that derived dates
/// (expiry, validity, follow-up) are exact in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, settable from tests
#[derive(Debug)]
pub struct ManualClock {
    now: std::sync::Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: std::sync::Mutex::new(now),
        }
    }

    /// Moves the clock to a new instant
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock lock poisoned") = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_add_calendar_month_exact() {
        let from = utc(2024, 3, 15);
        let to = add_calendar_months(from, 1).unwrap();
        assert_eq!(to, utc(2024, 4, 15));
    }

    #[test]
    fn test_add_calendar_month_clamps_short_month() {
        let from = utc(2024, 1, 31);
        let to = add_calendar_months(from, 1).unwrap();
        assert_eq!(to, utc(2024, 2, 29));
    }

    #[test]
    fn test_add_calendar_year() {
        let from = utc(2024, 6, 1);
        let to = add_calendar_years(from, 1).unwrap();
        assert_eq!(to, utc(2025, 6, 1));
    }

    #[test]
    fn test_add_days() {
        let from = utc(2024, 6, 28);
        let to = add_days(from, 7).unwrap();
        assert_eq!(to, utc(2024, 7, 5));
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(utc(2024, 1, 1));
        assert_eq!(clock.now(), utc(2024, 1, 1));
        clock.set(utc(2024, 2, 1));
        assert_eq!(clock.now(), utc(2024, 2, 1));
    }
}
