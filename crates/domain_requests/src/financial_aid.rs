//! Financial-aid request aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Actor, AdminId, ClientId, FinancialAidRequestId, Money, Rate};

/// Financial-aid request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialAidStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
    RequiresMoreInfo,
}

/// What the aid is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AidRequestType {
    MonthlyPackage,
    IndividualService,
    CaseFiling,
}

/// Operator triage priority
///
/// `rank()` gives the queue sort key: urgent is coded lowest so an
/// ascending sort puts it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AidPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl AidPriority {
    pub fn rank(&self) -> u8 {
        match self {
            AidPriority::Urgent => 0,
            AidPriority::High => 1,
            AidPriority::Medium => 2,
            AidPriority::Low => 3,
        }
    }
}

/// How an approved subsidy is to be paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPlan {
    FullPayment,
    Installments(u32),
}

/// Terms granted on approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalDetails {
    /// Amount granted (defaults to the requested amount)
    pub approved_amount: Money,
    /// Discount granted (defaults to the requested percentage)
    pub approved_discount: Rate,
    /// Payout plan
    pub payment_plan: PaymentPlan,
    /// Conditions attached to the grant
    pub conditions: Vec<String>,
    /// When the grant lapses
    pub valid_until: DateTime<Utc>,
}

/// Operator response when more information is required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminResponse {
    /// Message to the client
    pub message: String,
    /// Documents the client must supply
    pub required_documents: Vec<String>,
}

/// A client's request for subsidized service pricing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialAidRequest {
    /// Unique identifier
    pub id: FinancialAidRequestId,
    /// Requesting client
    pub client_id: ClientId,
    /// What the aid applies to
    pub request_type: AidRequestType,
    /// Amount the client asked for
    pub requested_amount: Money,
    /// Discount the client asked for
    pub discount_percentage: Rate,
    /// Triage priority
    pub priority: AidPriority,
    /// Status
    pub status: FinancialAidStatus,
    /// Who last reviewed
    pub reviewed_by: Option<AdminId>,
    /// When last reviewed
    pub review_date: Option<DateTime<Utc>>,
    /// Reviewer notes
    pub review_notes: Option<String>,
    /// Terms granted, set iff approved
    pub approval_details: Option<ApprovalDetails>,
    /// Operator response, set when more info was requested
    pub admin_response: Option<AdminResponse>,
    /// Whether a follow-up is outstanding
    pub follow_up_required: bool,
    /// When the follow-up is due
    pub follow_up_date: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl FinancialAidRequest {
    /// Creates a new request in `Pending`
    pub fn new(
        client_id: ClientId,
        request_type: AidRequestType,
        requested_amount: Money,
        discount_percentage: Rate,
        priority: AidPriority,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: FinancialAidRequestId::new_v7(),
            client_id,
            request_type,
            requested_amount,
            discount_percentage,
            priority,
            status: FinancialAidStatus::Pending,
            reviewed_by: None,
            review_date: None,
            review_notes: None,
            approval_details: None,
            admin_response: None,
            follow_up_required: false,
            follow_up_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamps approval metadata and the granted terms
    pub fn record_approval(
        &mut self,
        actor: Actor,
        notes: Option<String>,
        details: ApprovalDetails,
        now: DateTime<Utc>,
    ) {
        self.status = FinancialAidStatus::Approved;
        self.reviewed_by = Some(actor.id);
        self.review_date = Some(now);
        self.review_notes = notes;
        self.approval_details = Some(details);
        self.updated_at = now;
    }

    /// Stamps rejection metadata
    pub fn record_rejection(&mut self, actor: Actor, reason: String, now: DateTime<Utc>) {
        self.status = FinancialAidStatus::Rejected;
        self.reviewed_by = Some(actor.id);
        self.review_date = Some(now);
        self.review_notes = Some(reason);
        self.updated_at = now;
    }

    /// Stamps an information request and schedules the follow-up
    pub fn record_info_request(
        &mut self,
        actor: Actor,
        response: AdminResponse,
        follow_up_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) {
        self.status = FinancialAidStatus::RequiresMoreInfo;
        self.reviewed_by = Some(actor.id);
        self.review_date = Some(now);
        self.admin_response = Some(response);
        self.follow_up_required = true;
        self.follow_up_date = Some(follow_up_date);
        self.updated_at = now;
    }

    /// Applies an administrative status override
    ///
    /// No guarded metadata is stamped; the override only moves the status.
    pub fn apply_override(&mut self, status: FinancialAidStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}
