//! Operator triage queues

use domain_requests::FinancialAidRequest;

/// Financial-aid queue ordering: priority ascending (urgent is coded
/// lowest, so it sorts first), then newest-first within a priority tier.
/// Operators triage urgent items first and see fresh ones on top.
pub fn financial_aid_queue(requests: &[FinancialAidRequest]) -> Vec<&FinancialAidRequest> {
    let mut queue: Vec<&FinancialAidRequest> = requests.iter().collect();
    queue.sort_by(|a, b| {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then(b.created_at.cmp(&a.created_at))
    });
    queue
}
