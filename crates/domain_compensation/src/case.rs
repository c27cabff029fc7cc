//! Case and lawyer read models
//!
//! Cases are owned by the case-management collaborator; this domain only
//! reads them to derive compensation obligations.

use serde::{Deserialize, Serialize};

use core_kernel::{CaseId, LawyerId};

/// Case lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Intake,
    LawyerAssigned,
    Filed,
    SchedulingRequested,
    HearingScheduled,
    Rescheduled,
    Completed,
    Closed,
    Dismissed,
}

impl CaseStatus {
    /// Statuses that entitle the assigned lawyer to compensation
    pub const COMPENSABLE: [CaseStatus; 6] = [
        CaseStatus::LawyerAssigned,
        CaseStatus::Filed,
        CaseStatus::SchedulingRequested,
        CaseStatus::HearingScheduled,
        CaseStatus::Rescheduled,
        CaseStatus::Completed,
    ];

    pub fn is_compensable(&self) -> bool {
        Self::COMPENSABLE.contains(self)
    }
}

/// A legal case, read-only here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub case_number: String,
    pub status: CaseStatus,
    pub current_lawyer: Option<LawyerId>,
}

impl Case {
    pub fn new(
        id: CaseId,
        case_number: impl Into<String>,
        status: CaseStatus,
        current_lawyer: Option<LawyerId>,
    ) -> Self {
        Self {
            id,
            case_number: case_number.into(),
            status,
            current_lawyer,
        }
    }
}

/// A lawyer on the platform's roster, read-only here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: LawyerId,
    pub name: String,
}

impl Lawyer {
    pub fn new(id: LawyerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
