//! Settlement coordinator
//!
//! Executes one transition end-to-end: state-machine validation, metadata
//! stamping, compare-and-swap persistence, then payment effects. The
//! payment side is best-effort by design: when it fails after the status
//! committed, the failure is logged as a warning and the status stands.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::{
    Actor, ActivityEvent, ActivityLog, Clock, FinancialAidRequestId,
    IndividualServiceRequestId, LawyerId, ServiceRequestId,
};
use domain_requests::{
    transitions, FinancialAidRequest, FinancialAidStatus, IndividualServiceRequest,
    IndividualServiceRequestStatus, ServiceRequest, ServiceRequestStatus, SettlementEffect,
};

use crate::error::SettlementError;
use crate::policy::SettlementPolicy;
use crate::ports::SettlementStore;
use crate::terms::{self, AidApprovalInput};

/// The single write path for request status changes
pub struct SettlementCoordinator<S> {
    store: Arc<S>,
    activity: Arc<dyn ActivityLog>,
    clock: Arc<dyn Clock>,
    policy: SettlementPolicy,
}

impl<S: SettlementStore> SettlementCoordinator<S> {
    pub fn new(store: Arc<S>, activity: Arc<dyn ActivityLog>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            activity,
            clock,
            policy: SettlementPolicy::default(),
        }
    }

    /// Replaces the default policy windows
    pub fn with_policy(mut self, policy: SettlementPolicy) -> Self {
        self.policy = policy;
        self
    }

    // -----------------------------------------------------------------
    // Package service requests
    // -----------------------------------------------------------------

    /// Approves a package purchase, deriving its expiry from the package
    /// duration and completing the linked payment.
    pub async fn approve_service_request(
        &self,
        id: ServiceRequestId,
        actor: Actor,
        notes: Option<String>,
    ) -> Result<ServiceRequest, SettlementError> {
        let mut request = self.store.get_service_request(id).await?;
        let transition = transitions::approve_service_request(&request)?;

        let now = self.clock.now();
        let package = self.store.get_package(request.package_id).await?;
        let expiry = terms::package_expiry(now, package.duration)?;

        request.record_approval(actor, notes, expiry, now);

        let won = self
            .store
            .update_service_request_if_status(&request, ServiceRequestStatus::Processing)
            .await?;
        if !won {
            let current = self.store.get_service_request(id).await?;
            return Err(SettlementError::invalid_transition(
                current.status,
                ServiceRequestStatus::Approved,
            ));
        }

        info!(request = %request.id, "service request approved");
        self.apply_effects(&transition.effects).await;
        self.activity
            .record(ActivityEvent::new("service_request.approved", request.id, actor));

        Ok(request)
    }

    /// Rejects a package purchase. The linked payment transaction is
    /// deliberately left untouched.
    pub async fn reject_service_request(
        &self,
        id: ServiceRequestId,
        actor: Actor,
        reason: String,
    ) -> Result<ServiceRequest, SettlementError> {
        let mut request = self.store.get_service_request(id).await?;
        let transition = transitions::reject_service_request(&request, &reason)?;

        let now = self.clock.now();
        request.record_rejection(actor, reason.clone(), now);

        let won = self
            .store
            .update_service_request_if_status(&request, ServiceRequestStatus::Processing)
            .await?;
        if !won {
            let current = self.store.get_service_request(id).await?;
            return Err(SettlementError::invalid_transition(
                current.status,
                ServiceRequestStatus::Rejected,
            ));
        }

        info!(request = %request.id, "service request rejected");
        self.apply_effects(&transition.effects).await;
        self.activity.record(
            ActivityEvent::new("service_request.rejected", request.id, actor).with_detail(reason),
        );

        Ok(request)
    }

    // -----------------------------------------------------------------
    // Individual service requests
    // -----------------------------------------------------------------

    /// Approves an à-la-carte service request, optionally assigning a
    /// lawyer (the reference must resolve) and completing the linked
    /// payment.
    pub async fn approve_individual_request(
        &self,
        id: IndividualServiceRequestId,
        actor: Actor,
        notes: Option<String>,
        assigned_lawyer: Option<LawyerId>,
    ) -> Result<IndividualServiceRequest, SettlementError> {
        let mut request = self.store.get_individual_request(id).await?;
        let transition = transitions::approve_individual_request(&request)?;

        if let Some(lawyer_id) = assigned_lawyer {
            if !self.store.lawyer_exists(lawyer_id).await? {
                return Err(SettlementError::not_found("Lawyer", lawyer_id));
            }
        }

        let now = self.clock.now();
        request.record_approval(actor, notes, assigned_lawyer, now);

        let won = self
            .store
            .update_individual_request_if_status(
                &request,
                IndividualServiceRequestStatus::Processing,
            )
            .await?;
        if !won {
            let current = self.store.get_individual_request(id).await?;
            return Err(SettlementError::invalid_transition(
                current.status,
                IndividualServiceRequestStatus::Approved,
            ));
        }

        info!(request = %request.id, "individual service request approved");
        self.apply_effects(&transition.effects).await;
        self.activity.record(ActivityEvent::new(
            "individual_request.approved",
            request.id,
            actor,
        ));

        Ok(request)
    }

    /// Rejects an à-la-carte service request, failing the linked payment
    /// with the rejection reason.
    pub async fn reject_individual_request(
        &self,
        id: IndividualServiceRequestId,
        actor: Actor,
        reason: String,
    ) -> Result<IndividualServiceRequest, SettlementError> {
        let mut request = self.store.get_individual_request(id).await?;
        let transition = transitions::reject_individual_request(&request, &reason)?;

        let now = self.clock.now();
        request.record_rejection(actor, reason.clone(), now);

        let won = self
            .store
            .update_individual_request_if_status(
                &request,
                IndividualServiceRequestStatus::Processing,
            )
            .await?;
        if !won {
            let current = self.store.get_individual_request(id).await?;
            return Err(SettlementError::invalid_transition(
                current.status,
                IndividualServiceRequestStatus::Rejected,
            ));
        }

        info!(request = %request.id, "individual service request rejected");
        self.apply_effects(&transition.effects).await;
        self.activity.record(
            ActivityEvent::new("individual_request.rejected", request.id, actor)
                .with_detail(reason),
        );

        Ok(request)
    }

    // -----------------------------------------------------------------
    // Financial-aid requests
    // -----------------------------------------------------------------

    /// Approves an aid request, resolving granted terms from the input
    /// with request/policy defaults.
    pub async fn approve_financial_aid(
        &self,
        id: FinancialAidRequestId,
        actor: Actor,
        input: AidApprovalInput,
    ) -> Result<FinancialAidRequest, SettlementError> {
        let mut request = self.store.get_financial_aid_request(id).await?;
        let from = request.status;
        transitions::approve_financial_aid(&request)?;

        let now = self.clock.now();
        let details = terms::resolve_aid_terms(&request, &input, now, &self.policy)?;
        request.record_approval(actor, input.notes, details, now);

        let won = self
            .store
            .update_financial_aid_if_status(&request, from)
            .await?;
        if !won {
            let current = self.store.get_financial_aid_request(id).await?;
            return Err(SettlementError::invalid_transition(
                current.status,
                FinancialAidStatus::Approved,
            ));
        }

        info!(request = %request.id, "financial aid request approved");
        self.activity
            .record(ActivityEvent::new("financial_aid.approved", request.id, actor));

        Ok(request)
    }

    /// Rejects an aid request with a reason.
    pub async fn reject_financial_aid(
        &self,
        id: FinancialAidRequestId,
        actor: Actor,
        reason: String,
    ) -> Result<FinancialAidRequest, SettlementError> {
        let mut request = self.store.get_financial_aid_request(id).await?;
        let from = request.status;
        transitions::reject_financial_aid(&request, &reason)?;

        let now = self.clock.now();
        request.record_rejection(actor, reason.clone(), now);

        let won = self
            .store
            .update_financial_aid_if_status(&request, from)
            .await?;
        if !won {
            let current = self.store.get_financial_aid_request(id).await?;
            return Err(SettlementError::invalid_transition(
                current.status,
                FinancialAidStatus::Rejected,
            ));
        }

        info!(request = %request.id, "financial aid request rejected");
        self.activity.record(
            ActivityEvent::new("financial_aid.rejected", request.id, actor).with_detail(reason),
        );

        Ok(request)
    }

    /// Asks the client for more information and schedules the follow-up.
    pub async fn request_more_info(
        &self,
        id: FinancialAidRequestId,
        actor: Actor,
        message: String,
        required_documents: Vec<String>,
    ) -> Result<FinancialAidRequest, SettlementError> {
        let mut request = self.store.get_financial_aid_request(id).await?;
        let from = request.status;
        transitions::request_more_info(&request, &message)?;

        let now = self.clock.now();
        let due = terms::follow_up_date(now, &self.policy)?;
        request.record_info_request(
            actor,
            domain_requests::AdminResponse {
                message: message.clone(),
                required_documents,
            },
            due,
            now,
        );

        let won = self
            .store
            .update_financial_aid_if_status(&request, from)
            .await?;
        if !won {
            let current = self.store.get_financial_aid_request(id).await?;
            return Err(SettlementError::invalid_transition(
                current.status,
                FinancialAidStatus::RequiresMoreInfo,
            ));
        }

        info!(request = %request.id, "financial aid information requested");
        self.activity.record(
            ActivityEvent::new("financial_aid.info_requested", request.id, actor)
                .with_detail(message),
        );

        Ok(request)
    }

    /// Administrative status override: any target from any source, with
    /// no guarded metadata and no payment sync. Every use is logged.
    pub async fn override_financial_aid_status(
        &self,
        id: FinancialAidRequestId,
        actor: Actor,
        status: FinancialAidStatus,
    ) -> Result<FinancialAidRequest, SettlementError> {
        let mut request = self.store.get_financial_aid_request(id).await?;
        let from = request.status;
        let transition = transitions::override_status(status);

        let now = self.clock.now();
        request.apply_override(transition.to, now);
        self.store.update_financial_aid(&request).await?;

        info!(
            request = %request.id,
            from = ?from,
            to = ?status,
            "financial aid status overridden without settlement effects"
        );
        self.activity.record(
            ActivityEvent::new("financial_aid.status_overridden", request.id, actor)
                .with_detail(format!("{:?} -> {:?}", from, status)),
        );

        Ok(request)
    }

    // -----------------------------------------------------------------
    // Effects
    // -----------------------------------------------------------------

    /// Applies payment effects after the status mutation committed.
    ///
    /// Best-effort: a failure here leaves the committed status standing
    /// and is surfaced in the log, never to the caller.
    async fn apply_effects(&self, effects: &[SettlementEffect]) {
        for effect in effects {
            if let Err(err) = self.apply_effect(effect).await {
                warn!(
                    effect = ?effect,
                    error = %err,
                    "payment side effect failed; request status stands"
                );
            }
        }
    }

    async fn apply_effect(&self, effect: &SettlementEffect) -> Result<(), SettlementError> {
        let now = self.clock.now();
        match effect {
            SettlementEffect::CompletePayment { payment_id } => {
                let mut payment = self.store.get_payment(*payment_id).await?;
                payment.complete(now);
                self.store.save_payment(&payment).await?;
            }
            SettlementEffect::FailPayment { payment_id, reason } => {
                let mut payment = self.store.get_payment(*payment_id).await?;
                payment.fail(reason.clone(), now);
                self.store.save_payment(&payment).await?;
            }
        }
        Ok(())
    }
}
