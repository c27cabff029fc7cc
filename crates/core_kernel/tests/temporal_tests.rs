//! Suite tests for temporal helpers

use chrono::{DateTime, TimeZone, Utc};

use core_kernel::temporal::{add_calendar_months, add_calendar_years, add_days};
use core_kernel::{Clock, ManualClock, SystemClock};

fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
}

#[test]
fn test_month_addition_preserves_time_of_day() {
    let from = utc(2025, 5, 10);
    let to = add_calendar_months(from, 1).unwrap();
    assert_eq!(to, utc(2025, 6, 10));
}

#[test]
fn test_month_addition_across_year_boundary() {
    let from = utc(2025, 12, 15);
    let to = add_calendar_months(from, 1).unwrap();
    assert_eq!(to, utc(2026, 1, 15));
}

#[test]
fn test_year_addition_on_leap_day_clamps() {
    let from = utc(2024, 2, 29);
    let to = add_calendar_years(from, 1).unwrap();
    assert_eq!(to, utc(2025, 2, 28));
}

#[test]
fn test_thirty_day_window() {
    let from = utc(2025, 1, 15);
    let to = add_days(from, 30).unwrap();
    assert_eq!(to, utc(2025, 2, 14));
}

#[test]
fn test_system_clock_advances() {
    let clock = SystemClock;
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
}

#[test]
fn test_manual_clock_is_fixed() {
    let clock = ManualClock::new(utc(2025, 3, 1));
    assert_eq!(clock.now(), clock.now());
}
