//! Dashboard statistics

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use core_kernel::{ClientId, Currency};
use domain_requests::{
    AidPriority, AidRequestType, FinancialAidRequest, FinancialAidStatus,
    IndividualServiceRequest, IndividualServiceRequestStatus, ServiceRequest,
    ServiceRequestStatus,
};
use domain_settlement::{PaymentStatus, PaymentTransaction};

use crate::policy::ReportingPolicy;
use crate::revenue::RevenueSummary;

/// A point-in-time view of the entities the dashboard reports over
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub service_requests: &'a [ServiceRequest],
    pub individual_requests: &'a [IndividualServiceRequest],
    pub aid_requests: &'a [FinancialAidRequest],
    pub payments: &'a [PaymentTransaction],
}

/// Which kind of purchase a recent-view row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Package,
    IndividualService,
}

/// A row in the recent-processing-requests view
#[derive(Debug, Clone, Serialize)]
pub struct RecentRequest {
    pub id: String,
    pub kind: RequestKind,
    pub client_id: ClientId,
    pub created_at: DateTime<Utc>,
}

/// The operator dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub revenue: RevenueSummary,
    pub service_requests_by_status: HashMap<ServiceRequestStatus, usize>,
    pub individual_requests_by_status: HashMap<IndividualServiceRequestStatus, usize>,
    pub aid_requests_by_status: HashMap<FinancialAidStatus, usize>,
    pub aid_requests_by_priority: HashMap<AidPriority, usize>,
    pub aid_requests_by_type: HashMap<AidRequestType, usize>,
    pub payments_by_status: HashMap<PaymentStatus, usize>,
    /// Requests still awaiting a decision, newest first, capped at the
    /// policy page size
    pub recent_processing: Vec<RecentRequest>,
}

/// Computes the dashboard from a snapshot at a reference instant
pub fn dashboard_stats(
    snapshot: Snapshot<'_>,
    now: DateTime<Utc>,
    currency: Currency,
    policy: &ReportingPolicy,
) -> DashboardStats {
    let mut service_by_status = HashMap::new();
    for req in snapshot.service_requests {
        *service_by_status.entry(req.status).or_insert(0) += 1;
    }

    let mut individual_by_status = HashMap::new();
    for req in snapshot.individual_requests {
        *individual_by_status.entry(req.status).or_insert(0) += 1;
    }

    let mut aid_by_status = HashMap::new();
    let mut aid_by_priority = HashMap::new();
    let mut aid_by_type = HashMap::new();
    for req in snapshot.aid_requests {
        *aid_by_status.entry(req.status).or_insert(0) += 1;
        *aid_by_priority.entry(req.priority).or_insert(0) += 1;
        *aid_by_type.entry(req.request_type).or_insert(0) += 1;
    }

    let mut payments_by_status = HashMap::new();
    for payment in snapshot.payments {
        *payments_by_status.entry(payment.status).or_insert(0) += 1;
    }

    DashboardStats {
        revenue: RevenueSummary::compute(snapshot.payments, now, currency),
        service_requests_by_status: service_by_status,
        individual_requests_by_status: individual_by_status,
        aid_requests_by_status: aid_by_status,
        aid_requests_by_priority: aid_by_priority,
        aid_requests_by_type: aid_by_type,
        payments_by_status,
        recent_processing: recent_processing(snapshot, policy),
    }
}

/// The newest requests still in `Processing`, across both purchase kinds
fn recent_processing(snapshot: Snapshot<'_>, policy: &ReportingPolicy) -> Vec<RecentRequest> {
    let mut recent: Vec<RecentRequest> = snapshot
        .service_requests
        .iter()
        .filter(|r| r.status == ServiceRequestStatus::Processing)
        .map(|r| RecentRequest {
            id: r.id.to_string(),
            kind: RequestKind::Package,
            client_id: r.client_id,
            created_at: r.created_at,
        })
        .chain(
            snapshot
                .individual_requests
                .iter()
                .filter(|r| r.status == IndividualServiceRequestStatus::Processing)
                .map(|r| RecentRequest {
                    id: r.id.to_string(),
                    kind: RequestKind::IndividualService,
                    client_id: r.client_id,
                    created_at: r.created_at,
                }),
        )
        .collect();

    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(policy.recent_page_size);
    recent
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_kernel::{ServicePackageId, IndividualServiceId};

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_counts_by_status() {
        let mut approved = ServiceRequest::new(ClientId::new(), ServicePackageId::new(), utc(2025, 5, 1));
        approved.status = ServiceRequestStatus::Approved;
        let processing = ServiceRequest::new(ClientId::new(), ServicePackageId::new(), utc(2025, 5, 2));

        let service_requests = vec![approved, processing];
        let snapshot = Snapshot {
            service_requests: &service_requests,
            individual_requests: &[],
            aid_requests: &[],
            payments: &[],
        };

        let stats = dashboard_stats(
            snapshot,
            utc(2025, 5, 10),
            Currency::USD,
            &ReportingPolicy::default(),
        );

        assert_eq!(stats.service_requests_by_status[&ServiceRequestStatus::Approved], 1);
        assert_eq!(stats.service_requests_by_status[&ServiceRequestStatus::Processing], 1);
    }

    #[test]
    fn test_recent_processing_newest_first_and_capped() {
        let mut service_requests = Vec::new();
        for day in 1..=15 {
            service_requests.push(ServiceRequest::new(
                ClientId::new(),
                ServicePackageId::new(),
                utc(2025, 5, day),
            ));
        }
        let snapshot = Snapshot {
            service_requests: &service_requests,
            individual_requests: &[],
            aid_requests: &[],
            payments: &[],
        };

        let policy = ReportingPolicy { recent_page_size: 5 };
        let stats = dashboard_stats(snapshot, utc(2025, 5, 20), Currency::USD, &policy);

        assert_eq!(stats.recent_processing.len(), 5);
        assert_eq!(stats.recent_processing[0].created_at, utc(2025, 5, 15));
        assert_eq!(stats.recent_processing[4].created_at, utc(2025, 5, 11));
    }

    #[test]
    fn test_recent_processing_merges_both_kinds() {
        let service_requests =
            vec![ServiceRequest::new(ClientId::new(), ServicePackageId::new(), utc(2025, 5, 1))];
        let individual_requests = vec![IndividualServiceRequest::new(
            ClientId::new(),
            IndividualServiceId::new(),
            utc(2025, 5, 3),
        )];
        let snapshot = Snapshot {
            service_requests: &service_requests,
            individual_requests: &individual_requests,
            aid_requests: &[],
            payments: &[],
        };

        let stats = dashboard_stats(
            snapshot,
            utc(2025, 5, 10),
            Currency::USD,
            &ReportingPolicy::default(),
        );

        assert_eq!(stats.recent_processing.len(), 2);
        assert_eq!(stats.recent_processing[0].kind, RequestKind::IndividualService);
        assert_eq!(stats.recent_processing[1].kind, RequestKind::Package);
    }
}
