//! Test data builders
//!
//! Builder patterns for constructing test entities with sensible
//! defaults; tests set only the fields they care about.

use chrono::{DateTime, Utc};

use core_kernel::{
    CaseId, ClientId, Currency, IndividualServiceId, LawyerId, Money, PaymentTransactionId,
    Rate, ServicePackageId,
};
use domain_compensation::{Case, CaseStatus};
use domain_requests::{
    AidPriority, AidRequestType, FinancialAidRequest, FinancialAidStatus,
    IndividualServiceRequest, ServiceRequest, ServiceRequestStatus,
};
use domain_settlement::{PaymentReference, PaymentTransaction};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for package service requests
pub struct ServiceRequestBuilder {
    client_id: ClientId,
    package_id: ServicePackageId,
    status: ServiceRequestStatus,
    payment_transaction: Option<PaymentTransactionId>,
    created_at: DateTime<Utc>,
}

impl Default for ServiceRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceRequestBuilder {
    pub fn new() -> Self {
        Self {
            client_id: ClientId::new(),
            package_id: ServicePackageId::new(),
            status: ServiceRequestStatus::Processing,
            payment_transaction: None,
            created_at: TemporalFixtures::reference_now(),
        }
    }

    pub fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = client_id;
        self
    }

    pub fn with_package(mut self, package_id: ServicePackageId) -> Self {
        self.package_id = package_id;
        self
    }

    pub fn with_status(mut self, status: ServiceRequestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_payment(mut self, payment_id: PaymentTransactionId) -> Self {
        self.payment_transaction = Some(payment_id);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> ServiceRequest {
        let mut request = ServiceRequest::new(self.client_id, self.package_id, self.created_at);
        request.status = self.status;
        request.payment_transaction = self.payment_transaction;
        request
    }
}

/// Builder for individual service requests
pub struct IndividualServiceRequestBuilder {
    client_id: ClientId,
    service_id: IndividualServiceId,
    payment_transaction: Option<PaymentTransactionId>,
    assigned_lawyer: Option<LawyerId>,
    created_at: DateTime<Utc>,
}

impl Default for IndividualServiceRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndividualServiceRequestBuilder {
    pub fn new() -> Self {
        Self {
            client_id: ClientId::new(),
            service_id: IndividualServiceId::new(),
            payment_transaction: None,
            assigned_lawyer: None,
            created_at: TemporalFixtures::reference_now(),
        }
    }

    pub fn with_payment(mut self, payment_id: PaymentTransactionId) -> Self {
        self.payment_transaction = Some(payment_id);
        self
    }

    pub fn with_assigned_lawyer(mut self, lawyer_id: LawyerId) -> Self {
        self.assigned_lawyer = Some(lawyer_id);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> IndividualServiceRequest {
        let mut request =
            IndividualServiceRequest::new(self.client_id, self.service_id, self.created_at);
        request.payment_transaction = self.payment_transaction;
        request.assigned_lawyer = self.assigned_lawyer;
        request
    }
}

/// Builder for financial-aid requests
pub struct FinancialAidRequestBuilder {
    client_id: ClientId,
    request_type: AidRequestType,
    requested_amount: Money,
    discount_percentage: Rate,
    priority: AidPriority,
    status: FinancialAidStatus,
    created_at: DateTime<Utc>,
}

impl Default for FinancialAidRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FinancialAidRequestBuilder {
    pub fn new() -> Self {
        Self {
            client_id: ClientId::new(),
            request_type: AidRequestType::MonthlyPackage,
            requested_amount: MoneyFixtures::aid_amount(),
            discount_percentage: MoneyFixtures::aid_discount(),
            priority: AidPriority::Medium,
            status: FinancialAidStatus::Pending,
            created_at: TemporalFixtures::reference_now(),
        }
    }

    pub fn with_type(mut self, request_type: AidRequestType) -> Self {
        self.request_type = request_type;
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.requested_amount = amount;
        self
    }

    pub fn with_discount(mut self, discount: Rate) -> Self {
        self.discount_percentage = discount;
        self
    }

    pub fn with_priority(mut self, priority: AidPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: FinancialAidStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> FinancialAidRequest {
        let mut request = FinancialAidRequest::new(
            self.client_id,
            self.request_type,
            self.requested_amount,
            self.discount_percentage,
            self.priority,
            self.created_at,
        );
        request.status = self.status;
        request
    }
}

/// Builder for payment transactions
pub struct PaymentTransactionBuilder {
    client_id: ClientId,
    reference: PaymentReference,
    amount: Money,
    created_at: DateTime<Utc>,
}

impl Default for PaymentTransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentTransactionBuilder {
    pub fn new() -> Self {
        Self {
            client_id: ClientId::new(),
            reference: PaymentReference::Package(ServicePackageId::new()),
            amount: MoneyFixtures::package_price(),
            created_at: TemporalFixtures::reference_now(),
        }
    }

    pub fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = client_id;
        self
    }

    pub fn for_package(mut self, package_id: ServicePackageId) -> Self {
        self.reference = PaymentReference::Package(package_id);
        self
    }

    pub fn for_service(mut self, service_id: IndividualServiceId) -> Self {
        self.reference = PaymentReference::IndividualService(service_id);
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn build(self) -> PaymentTransaction {
        PaymentTransaction::new(self.client_id, self.reference, self.amount, self.created_at)
    }
}

/// Builder for case read models
pub struct CaseBuilder {
    id: CaseId,
    case_number: String,
    status: CaseStatus,
    current_lawyer: Option<LawyerId>,
}

impl Default for CaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseBuilder {
    pub fn new() -> Self {
        Self {
            id: CaseId::new(),
            case_number: format!("CASE-{}", CaseId::new().as_uuid().simple()),
            status: CaseStatus::LawyerAssigned,
            current_lawyer: None,
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.case_number = number.into();
        self
    }

    pub fn with_status(mut self, status: CaseStatus) -> Self {
        self.status = status;
        self
    }

    pub fn assigned_to(mut self, lawyer_id: LawyerId) -> Self {
        self.current_lawyer = Some(lawyer_id);
        self
    }

    pub fn build(self) -> Case {
        Case::new(self.id, self.case_number, self.status, self.current_lawyer)
    }
}

/// Always-available USD helper used across suites
pub fn usd(amount: i64) -> Money {
    Money::from_minor(amount * 100, Currency::USD)
}
