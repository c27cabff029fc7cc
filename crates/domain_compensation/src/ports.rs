//! Compensation storage port

use async_trait::async_trait;

use core_kernel::{CaseId, DomainPort, LawyerId, PortError};

use crate::case::{Case, CaseStatus, Lawyer};
use crate::salary::LawyerSalary;

/// Storage operations the compensation calculator needs
#[async_trait]
pub trait CompensationStore: DomainPort {
    async fn list_lawyers(&self) -> Result<Vec<Lawyer>, PortError>;

    async fn get_lawyer(&self, id: LawyerId) -> Result<Lawyer, PortError>;

    async fn get_case(&self, id: CaseId) -> Result<Case, PortError>;

    /// Cases where the lawyer is the current assignee. `statuses`
    /// filters by case status; `None` returns every assigned case.
    async fn cases_assigned_to(
        &self,
        lawyer: LawyerId,
        statuses: Option<&[CaseStatus]>,
    ) -> Result<Vec<Case>, PortError>;

    async fn find_salary_entry(
        &self,
        lawyer: LawyerId,
        case: CaseId,
    ) -> Result<Option<LawyerSalary>, PortError>;

    /// Inserts a ledger entry. Must enforce the (lawyer, case) unique
    /// constraint atomically and return [`PortError::Conflict`] on a
    /// duplicate; a prior existence check alone cannot close the
    /// check-then-insert race.
    async fn insert_salary_entry(&self, entry: &LawyerSalary) -> Result<(), PortError>;
}
