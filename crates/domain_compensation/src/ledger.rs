//! Compensation ledger derivation
//!
//! `compute_ledger` is a read/derive pipeline: it never mutates request
//! or case state. `pay_lawyer` is the ledger's only write path.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use core_kernel::{Actor, ActivityEvent, ActivityLog, CaseId, Clock, LawyerId, Money, PortError};

use crate::case::{Case, CaseStatus};
use crate::error::CompensationError;
use crate::policy::CompensationPolicy;
use crate::ports::CompensationStore;
use crate::salary::LawyerSalary;

/// One case's contribution to a lawyer's ledger
#[derive(Debug, Clone, Serialize)]
pub struct CaseCompensation {
    pub case_id: CaseId,
    pub case_number: String,
    pub case_status: CaseStatus,
    pub amount: Money,
    pub paid: bool,
}

/// Per-lawyer compensation summary
#[derive(Debug, Clone, Serialize)]
pub struct LawyerLedger {
    pub lawyer_id: LawyerId,
    pub lawyer_name: String,
    pub cases: Vec<CaseCompensation>,
    pub total_cases: usize,
    pub total_unpaid_cases: usize,
    pub total_unpaid_amount: Money,
    /// True when the compensable-status filter matched nothing and the
    /// ledger degraded to all assigned cases
    pub used_fallback: bool,
}

/// Derives lawyer compensation and records payments
pub struct CompensationCalculator<S> {
    store: Arc<S>,
    activity: Arc<dyn ActivityLog>,
    clock: Arc<dyn Clock>,
    policy: CompensationPolicy,
}

impl<S: CompensationStore> CompensationCalculator<S> {
    pub fn new(store: Arc<S>, activity: Arc<dyn ActivityLog>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            activity,
            clock,
            policy: CompensationPolicy::default(),
        }
    }

    /// Replaces the default policy
    pub fn with_policy(mut self, policy: CompensationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the per-lawyer ledger, sorted by outstanding amount
    /// descending; lawyers tied on the amount keep roster order.
    pub async fn compute_ledger(&self) -> Result<Vec<LawyerLedger>, CompensationError> {
        let lawyers = self.store.list_lawyers().await?;
        let mut ledgers = Vec::with_capacity(lawyers.len());

        for lawyer in lawyers {
            let mut used_fallback = false;
            let mut cases = self
                .store
                .cases_assigned_to(lawyer.id, Some(&CaseStatus::COMPENSABLE))
                .await?;

            if cases.is_empty() && self.policy.fallback_to_all_cases {
                cases = self.store.cases_assigned_to(lawyer.id, None).await?;
                if !cases.is_empty() {
                    used_fallback = true;
                    warn!(
                        lawyer = %lawyer.id,
                        cases = cases.len(),
                        "no cases in a compensable status; degrading to all assigned cases"
                    );
                }
            }

            let mut entries = Vec::with_capacity(cases.len());
            for case in &cases {
                entries.push(self.case_compensation(lawyer.id, case).await?);
            }

            let total_cases = entries.len();
            let total_unpaid_cases = entries.iter().filter(|e| !e.paid).count();
            let total_unpaid_amount = entries
                .iter()
                .filter(|e| !e.paid)
                .map(|e| e.amount)
                .fold(
                    Money::zero(self.policy.per_case_rate.currency()),
                    |acc, amount| acc + amount,
                );

            ledgers.push(LawyerLedger {
                lawyer_id: lawyer.id,
                lawyer_name: lawyer.name,
                cases: entries,
                total_cases,
                total_unpaid_cases,
                total_unpaid_amount,
                used_fallback,
            });
        }

        // Stable sort keeps roster order on equal amounts; the UI
        // depends on this ordering.
        ledgers.sort_by(|a, b| {
            b.total_unpaid_amount
                .amount()
                .cmp(&a.total_unpaid_amount.amount())
        });

        Ok(ledgers)
    }

    async fn case_compensation(
        &self,
        lawyer: LawyerId,
        case: &Case,
    ) -> Result<CaseCompensation, CompensationError> {
        let entry = self.store.find_salary_entry(lawyer, case.id).await?;
        let (amount, paid) = match entry {
            Some(existing) => (existing.amount, true),
            None => (self.policy.per_case_rate, false),
        };

        Ok(CaseCompensation {
            case_id: case.id,
            case_number: case.case_number.clone(),
            case_status: case.status,
            amount,
            paid,
        })
    }

    /// Records a compensation payment for one (lawyer, case) pair.
    ///
    /// The uniqueness of the pair is enforced by the store's insert, not
    /// by a prior lookup, so two racing payments cannot both land.
    pub async fn pay_lawyer(
        &self,
        lawyer_id: LawyerId,
        case_id: CaseId,
        amount: Money,
        actor: Actor,
    ) -> Result<LawyerSalary, CompensationError> {
        let lawyer = self.store.get_lawyer(lawyer_id).await?;
        let case = self.store.get_case(case_id).await?;

        let entry = LawyerSalary::paid(lawyer.id, case.id, amount, actor, self.clock.now());

        match self.store.insert_salary_entry(&entry).await {
            Ok(()) => {}
            Err(PortError::Conflict { .. }) => {
                return Err(CompensationError::DuplicatePayment {
                    lawyer: lawyer_id,
                    case: case_id,
                });
            }
            Err(other) => return Err(other.into()),
        }

        info!(
            lawyer = %lawyer.id,
            case = %case.id,
            amount = %entry.amount,
            reference = %entry.transaction_ref,
            "lawyer compensation recorded"
        );
        self.activity.record(
            ActivityEvent::new("lawyer_salary.paid", entry.id, actor)
                .with_detail(format!("case {} via {}", case.case_number, entry.transaction_ref)),
        );

        Ok(entry)
    }
}
