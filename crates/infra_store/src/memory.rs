//! In-memory document store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{
    CaseId, DomainPort, FinancialAidRequestId, IndividualServiceRequestId, LawyerId,
    PaymentTransactionId, PortError, SalaryEntryId, ServicePackageId, ServiceRequestId,
};
use domain_compensation::{Case, CaseStatus, CompensationStore, Lawyer, LawyerSalary};
use domain_requests::{
    FinancialAidRequest, FinancialAidStatus, IndividualServiceRequest,
    IndividualServiceRequestStatus, ServiceRequest, ServiceRequestStatus,
};
use domain_settlement::{PaymentTransaction, ServicePackage, SettlementStore};

/// Salary entries plus the (lawyer, case) uniqueness index, kept under
/// one lock so the constraint check and the insert are a single step
#[derive(Debug, Default)]
struct SalaryLedger {
    entries: HashMap<SalaryEntryId, LawyerSalary>,
    by_pair: HashMap<(LawyerId, CaseId), SalaryEntryId>,
}

/// An in-memory document store with per-collection write locks
///
/// Each write lock gives the document-level atomicity the ports demand;
/// nothing here survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    service_requests: RwLock<HashMap<ServiceRequestId, ServiceRequest>>,
    individual_requests: RwLock<HashMap<IndividualServiceRequestId, IndividualServiceRequest>>,
    aid_requests: RwLock<HashMap<FinancialAidRequestId, FinancialAidRequest>>,
    payments: RwLock<HashMap<PaymentTransactionId, PaymentTransaction>>,
    packages: RwLock<HashMap<ServicePackageId, ServicePackage>>,
    // Roster and case lists keep insertion order; ledger tie-breaking
    // depends on it.
    lawyers: RwLock<Vec<Lawyer>>,
    cases: RwLock<Vec<Case>>,
    salaries: RwLock<SalaryLedger>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------
    // Seeding
    // -----------------------------------------------------------------

    pub async fn put_service_request(&self, request: ServiceRequest) {
        self.service_requests.write().await.insert(request.id, request);
    }

    pub async fn put_individual_request(&self, request: IndividualServiceRequest) {
        self.individual_requests.write().await.insert(request.id, request);
    }

    pub async fn put_aid_request(&self, request: FinancialAidRequest) {
        self.aid_requests.write().await.insert(request.id, request);
    }

    pub async fn put_payment(&self, payment: PaymentTransaction) {
        self.payments.write().await.insert(payment.id, payment);
    }

    pub async fn put_package(&self, package: ServicePackage) {
        self.packages.write().await.insert(package.id, package);
    }

    pub async fn put_lawyer(&self, lawyer: Lawyer) {
        self.lawyers.write().await.push(lawyer);
    }

    pub async fn put_case(&self, case: Case) {
        self.cases.write().await.push(case);
    }

    /// Number of salary entries, for test assertions
    pub async fn salary_entry_count(&self) -> usize {
        self.salaries.read().await.entries.len()
    }
}

impl DomainPort for MemoryStore {}

#[async_trait]
impl SettlementStore for MemoryStore {
    async fn get_service_request(
        &self,
        id: ServiceRequestId,
    ) -> Result<ServiceRequest, PortError> {
        self.service_requests
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("ServiceRequest", id))
    }

    async fn update_service_request_if_status(
        &self,
        updated: &ServiceRequest,
        expected: ServiceRequestStatus,
    ) -> Result<bool, PortError> {
        let mut requests = self.service_requests.write().await;
        let current = requests
            .get(&updated.id)
            .ok_or_else(|| PortError::not_found("ServiceRequest", updated.id))?;

        if current.status != expected {
            debug!(request = %updated.id, "service request status moved; compare-and-swap lost");
            return Ok(false);
        }
        requests.insert(updated.id, updated.clone());
        Ok(true)
    }

    async fn get_individual_request(
        &self,
        id: IndividualServiceRequestId,
    ) -> Result<IndividualServiceRequest, PortError> {
        self.individual_requests
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("IndividualServiceRequest", id))
    }

    async fn update_individual_request_if_status(
        &self,
        updated: &IndividualServiceRequest,
        expected: IndividualServiceRequestStatus,
    ) -> Result<bool, PortError> {
        let mut requests = self.individual_requests.write().await;
        let current = requests
            .get(&updated.id)
            .ok_or_else(|| PortError::not_found("IndividualServiceRequest", updated.id))?;

        if current.status != expected {
            debug!(request = %updated.id, "individual request status moved; compare-and-swap lost");
            return Ok(false);
        }
        requests.insert(updated.id, updated.clone());
        Ok(true)
    }

    async fn get_financial_aid_request(
        &self,
        id: FinancialAidRequestId,
    ) -> Result<FinancialAidRequest, PortError> {
        self.aid_requests
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("FinancialAidRequest", id))
    }

    async fn update_financial_aid_if_status(
        &self,
        updated: &FinancialAidRequest,
        expected: FinancialAidStatus,
    ) -> Result<bool, PortError> {
        let mut requests = self.aid_requests.write().await;
        let current = requests
            .get(&updated.id)
            .ok_or_else(|| PortError::not_found("FinancialAidRequest", updated.id))?;

        if current.status != expected {
            debug!(request = %updated.id, "aid request status moved; compare-and-swap lost");
            return Ok(false);
        }
        requests.insert(updated.id, updated.clone());
        Ok(true)
    }

    async fn update_financial_aid(
        &self,
        updated: &FinancialAidRequest,
    ) -> Result<(), PortError> {
        let mut requests = self.aid_requests.write().await;
        if !requests.contains_key(&updated.id) {
            return Err(PortError::not_found("FinancialAidRequest", updated.id));
        }
        requests.insert(updated.id, updated.clone());
        Ok(())
    }

    async fn get_payment(
        &self,
        id: PaymentTransactionId,
    ) -> Result<PaymentTransaction, PortError> {
        self.payments
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("PaymentTransaction", id))
    }

    async fn save_payment(&self, payment: &PaymentTransaction) -> Result<(), PortError> {
        self.payments.write().await.insert(payment.id, payment.clone());
        Ok(())
    }

    async fn get_package(&self, id: ServicePackageId) -> Result<ServicePackage, PortError> {
        self.packages
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("ServicePackage", id))
    }

    async fn lawyer_exists(&self, id: LawyerId) -> Result<bool, PortError> {
        Ok(self.lawyers.read().await.iter().any(|l| l.id == id))
    }
}

#[async_trait]
impl CompensationStore for MemoryStore {
    async fn list_lawyers(&self) -> Result<Vec<Lawyer>, PortError> {
        Ok(self.lawyers.read().await.clone())
    }

    async fn get_lawyer(&self, id: LawyerId) -> Result<Lawyer, PortError> {
        self.lawyers
            .read()
            .await
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Lawyer", id))
    }

    async fn get_case(&self, id: CaseId) -> Result<Case, PortError> {
        self.cases
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Case", id))
    }

    async fn cases_assigned_to(
        &self,
        lawyer: LawyerId,
        statuses: Option<&[CaseStatus]>,
    ) -> Result<Vec<Case>, PortError> {
        Ok(self
            .cases
            .read()
            .await
            .iter()
            .filter(|c| c.current_lawyer == Some(lawyer))
            .filter(|c| statuses.map_or(true, |wanted| wanted.contains(&c.status)))
            .cloned()
            .collect())
    }

    async fn find_salary_entry(
        &self,
        lawyer: LawyerId,
        case: CaseId,
    ) -> Result<Option<LawyerSalary>, PortError> {
        let ledger = self.salaries.read().await;
        Ok(ledger
            .by_pair
            .get(&(lawyer, case))
            .and_then(|id| ledger.entries.get(id))
            .cloned())
    }

    async fn insert_salary_entry(&self, entry: &LawyerSalary) -> Result<(), PortError> {
        let mut ledger = self.salaries.write().await;
        let key = (entry.lawyer_id, entry.case_id);

        // Constraint check and insert under the same write lock.
        if ledger.by_pair.contains_key(&key) {
            return Err(PortError::conflict(format!(
                "salary entry exists for lawyer {} and case {}",
                entry.lawyer_id, entry.case_id
            )));
        }
        ledger.by_pair.insert(key, entry.id);
        ledger.entries.insert(entry.id, entry.clone());
        Ok(())
    }
}
