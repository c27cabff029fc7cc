//! Settlement storage port
//!
//! The persistence collaborator behind the coordinator. Implementations
//! must provide document-level atomicity for the `*_if_status` updates:
//! the stored status is compared and the write applied in one atomic
//! step, so racing transitions on the same request cannot both win.

use async_trait::async_trait;

use core_kernel::{
    DomainPort, FinancialAidRequestId, IndividualServiceRequestId, LawyerId, PortError,
    PaymentTransactionId, ServicePackageId, ServiceRequestId,
};
use domain_requests::{
    FinancialAidRequest, FinancialAidStatus, IndividualServiceRequest,
    IndividualServiceRequestStatus, ServiceRequest, ServiceRequestStatus,
};

use crate::package::ServicePackage;
use crate::payment::PaymentTransaction;

/// Storage operations the settlement coordinator needs
#[async_trait]
pub trait SettlementStore: DomainPort {
    async fn get_service_request(&self, id: ServiceRequestId)
        -> Result<ServiceRequest, PortError>;

    /// Persists `updated` only if the stored request is still in
    /// `expected`. Returns false when the compare fails (a concurrent
    /// transition won).
    async fn update_service_request_if_status(
        &self,
        updated: &ServiceRequest,
        expected: ServiceRequestStatus,
    ) -> Result<bool, PortError>;

    async fn get_individual_request(
        &self,
        id: IndividualServiceRequestId,
    ) -> Result<IndividualServiceRequest, PortError>;

    async fn update_individual_request_if_status(
        &self,
        updated: &IndividualServiceRequest,
        expected: IndividualServiceRequestStatus,
    ) -> Result<bool, PortError>;

    async fn get_financial_aid_request(
        &self,
        id: FinancialAidRequestId,
    ) -> Result<FinancialAidRequest, PortError>;

    async fn update_financial_aid_if_status(
        &self,
        updated: &FinancialAidRequest,
        expected: FinancialAidStatus,
    ) -> Result<bool, PortError>;

    /// Unconditional update, used only by the administrative override.
    async fn update_financial_aid(&self, updated: &FinancialAidRequest) -> Result<(), PortError>;

    async fn get_payment(&self, id: PaymentTransactionId)
        -> Result<PaymentTransaction, PortError>;

    async fn save_payment(&self, payment: &PaymentTransaction) -> Result<(), PortError>;

    async fn get_package(&self, id: ServicePackageId) -> Result<ServicePackage, PortError>;

    /// Resolution check for an approval-time lawyer assignment
    async fn lawyer_exists(&self, id: LawyerId) -> Result<bool, PortError>;
}
