//! End-to-end compensation tests over the in-memory adapter

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use core_kernel::{CaseId, Currency, LawyerId, ManualClock, Money};
use domain_compensation::{
    CaseStatus, CompensationCalculator, CompensationError, CompensationPolicy, Lawyer,
    SalaryPaymentStatus,
};
use infra_store::{MemoryStore, RecordingActivityLog};
use test_utils::{init_test_tracing, ActorFixtures, CaseBuilder};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 10, 11, 0, 0).unwrap()
}

struct Harness {
    store: Arc<MemoryStore>,
    calculator: Arc<CompensationCalculator<MemoryStore>>,
}

fn harness() -> Harness {
    harness_with_policy(CompensationPolicy::default())
}

fn harness_with_policy(policy: CompensationPolicy) -> Harness {
    init_test_tracing();
    let store = Arc::new(MemoryStore::new());
    let activity = Arc::new(RecordingActivityLog::new());
    let clock = Arc::new(ManualClock::new(now()));
    let calculator = Arc::new(
        CompensationCalculator::new(store.clone(), activity, clock).with_policy(policy),
    );
    Harness { store, calculator }
}

async fn seed_lawyer(h: &Harness, name: &str) -> LawyerId {
    let lawyer = Lawyer::new(LawyerId::new(), name);
    let id = lawyer.id;
    h.store.put_lawyer(lawyer).await;
    id
}

// ---------------------------------------------------------------------
// Ledger derivation
// ---------------------------------------------------------------------

#[tokio::test]
async fn unpaid_cases_are_owed_the_flat_rate() {
    let h = harness();
    let lawyer = seed_lawyer(&h, "Adv. Dara Khan").await;
    h.store
        .put_case(CaseBuilder::new().with_status(CaseStatus::Filed).assigned_to(lawyer).build())
        .await;
    h.store
        .put_case(
            CaseBuilder::new()
                .with_status(CaseStatus::Completed)
                .assigned_to(lawyer)
                .build(),
        )
        .await;

    let ledgers = h.calculator.compute_ledger().await.unwrap();

    assert_eq!(ledgers.len(), 1);
    let ledger = &ledgers[0];
    assert_eq!(ledger.total_cases, 2);
    assert_eq!(ledger.total_unpaid_cases, 2);
    assert_eq!(ledger.total_unpaid_amount.amount(), dec!(5000));
    assert!(!ledger.used_fallback);
}

#[tokio::test]
async fn paid_cases_use_the_ledger_entry_amount() {
    let h = harness();
    let lawyer = seed_lawyer(&h, "Adv. Dara Khan").await;
    let case = CaseBuilder::new()
        .with_status(CaseStatus::HearingScheduled)
        .assigned_to(lawyer)
        .build();
    let case_id = case.id;
    h.store.put_case(case).await;

    h.calculator
        .pay_lawyer(
            lawyer,
            case_id,
            Money::new(dec!(1800), Currency::USD),
            ActorFixtures::admin(),
        )
        .await
        .unwrap();

    let ledgers = h.calculator.compute_ledger().await.unwrap();
    let ledger = &ledgers[0];

    assert_eq!(ledger.total_cases, 1);
    assert_eq!(ledger.total_unpaid_cases, 0);
    assert!(ledger.total_unpaid_amount.is_zero());
    assert_eq!(ledger.cases[0].amount.amount(), dec!(1800));
    assert!(ledger.cases[0].paid);
}

#[tokio::test]
async fn non_compensable_statuses_fall_back_to_all_cases() {
    let h = harness();
    let lawyer = seed_lawyer(&h, "Adv. Noor Malik").await;
    h.store
        .put_case(CaseBuilder::new().with_status(CaseStatus::Intake).assigned_to(lawyer).build())
        .await;
    h.store
        .put_case(CaseBuilder::new().with_status(CaseStatus::Closed).assigned_to(lawyer).build())
        .await;

    let ledgers = h.calculator.compute_ledger().await.unwrap();
    let ledger = &ledgers[0];

    assert!(ledger.used_fallback);
    assert_eq!(ledger.total_cases, 2);
    assert_eq!(ledger.total_unpaid_amount.amount(), dec!(5000));
}

#[tokio::test]
async fn fallback_disabled_reports_zero_cases() {
    let policy = CompensationPolicy {
        fallback_to_all_cases: false,
        ..CompensationPolicy::default()
    };
    let h = harness_with_policy(policy);
    let lawyer = seed_lawyer(&h, "Adv. Noor Malik").await;
    h.store
        .put_case(CaseBuilder::new().with_status(CaseStatus::Intake).assigned_to(lawyer).build())
        .await;

    let ledgers = h.calculator.compute_ledger().await.unwrap();
    let ledger = &ledgers[0];

    assert!(!ledger.used_fallback);
    assert_eq!(ledger.total_cases, 0);
    assert!(ledger.total_unpaid_amount.is_zero());
}

#[tokio::test]
async fn ledger_sorts_by_outstanding_amount_descending_with_stable_ties() {
    let h = harness();
    // Roster order: one case, two cases, one case, none.
    let first = seed_lawyer(&h, "Adv. One-Case First").await;
    let busiest = seed_lawyer(&h, "Adv. Two-Cases").await;
    let second = seed_lawyer(&h, "Adv. One-Case Second").await;
    let idle = seed_lawyer(&h, "Adv. Idle").await;

    for (lawyer, count) in [(first, 1), (busiest, 2), (second, 1)] {
        for _ in 0..count {
            h.store
                .put_case(
                    CaseBuilder::new()
                        .with_status(CaseStatus::LawyerAssigned)
                        .assigned_to(lawyer)
                        .build(),
                )
                .await;
        }
    }

    let ledgers = h.calculator.compute_ledger().await.unwrap();
    let order: Vec<LawyerId> = ledgers.iter().map(|l| l.lawyer_id).collect();

    // Highest owed first; the two tied lawyers keep roster order; the
    // idle lawyer trails with zero owed.
    assert_eq!(order, vec![busiest, first, second, idle]);
}

// ---------------------------------------------------------------------
// Paying lawyers
// ---------------------------------------------------------------------

#[tokio::test]
async fn pay_lawyer_records_a_paid_entry_with_reference() {
    let h = harness();
    let lawyer = seed_lawyer(&h, "Adv. Dara Khan").await;
    let case = CaseBuilder::new().with_status(CaseStatus::Filed).assigned_to(lawyer).build();
    let case_id = case.id;
    h.store.put_case(case).await;

    let entry = h
        .calculator
        .pay_lawyer(
            lawyer,
            case_id,
            Money::new(dec!(2500), Currency::USD),
            ActorFixtures::super_admin(),
        )
        .await
        .unwrap();

    assert_eq!(entry.status, SalaryPaymentStatus::Paid);
    assert_eq!(entry.paid_at, Some(now()));
    assert!(entry.paid_by.is_some());
    assert!(entry.transaction_ref.starts_with("TXN-"));
    assert_eq!(h.store.salary_entry_count().await, 1);
}

#[tokio::test]
async fn second_payment_for_same_pair_is_duplicate() {
    let h = harness();
    let lawyer = seed_lawyer(&h, "Adv. Dara Khan").await;
    let case = CaseBuilder::new().with_status(CaseStatus::Filed).assigned_to(lawyer).build();
    let case_id = case.id;
    h.store.put_case(case).await;

    let amount = Money::new(dec!(2500), Currency::USD);
    h.calculator
        .pay_lawyer(lawyer, case_id, amount, ActorFixtures::admin())
        .await
        .unwrap();

    let err = h
        .calculator
        .pay_lawyer(lawyer, case_id, amount, ActorFixtures::admin())
        .await
        .unwrap_err();

    assert!(matches!(err, CompensationError::DuplicatePayment { .. }));
    assert_eq!(h.store.salary_entry_count().await, 1);
}

#[tokio::test]
async fn paying_unknown_lawyer_or_case_is_not_found() {
    let h = harness();
    let lawyer = seed_lawyer(&h, "Adv. Dara Khan").await;
    let case = CaseBuilder::new().assigned_to(lawyer).build();
    let case_id = case.id;
    h.store.put_case(case).await;
    let amount = Money::new(dec!(2500), Currency::USD);

    let unknown_lawyer = h
        .calculator
        .pay_lawyer(LawyerId::new(), case_id, amount, ActorFixtures::admin())
        .await
        .unwrap_err();
    assert!(matches!(unknown_lawyer, CompensationError::NotFound { .. }));

    let unknown_case = h
        .calculator
        .pay_lawyer(lawyer, CaseId::new(), amount, ActorFixtures::admin())
        .await
        .unwrap_err();
    assert!(matches!(unknown_case, CompensationError::NotFound { .. }));

    assert_eq!(h.store.salary_entry_count().await, 0);
}

#[tokio::test]
async fn racing_payments_for_same_pair_land_exactly_once() {
    let h = harness();
    let lawyer = seed_lawyer(&h, "Adv. Dara Khan").await;
    let case = CaseBuilder::new().with_status(CaseStatus::Filed).assigned_to(lawyer).build();
    let case_id = case.id;
    h.store.put_case(case).await;
    let amount = Money::new(dec!(2500), Currency::USD);

    let c1 = h.calculator.clone();
    let c2 = h.calculator.clone();
    let a = tokio::spawn(async move {
        c1.pay_lawyer(lawyer, case_id, amount, ActorFixtures::admin()).await
    });
    let b = tokio::spawn(async move {
        c2.pay_lawyer(lawyer, case_id, amount, ActorFixtures::admin()).await
    });

    let (ra, rb) = (a.await.unwrap(), b.await.unwrap());
    let successes = [&ra, &rb].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one payment must land");

    let loser = if ra.is_ok() { rb } else { ra };
    assert!(matches!(
        loser.unwrap_err(),
        CompensationError::DuplicatePayment { .. }
    ));
    assert_eq!(h.store.salary_entry_count().await, 1);
}
