//! Reporting policy configuration

use serde::Deserialize;

/// Fixed limits applied to report views
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ReportingPolicy {
    /// Page size of the recent-processing-requests view
    pub recent_page_size: usize,
}

impl Default for ReportingPolicy {
    fn default() -> Self {
        Self {
            recent_page_size: 10,
        }
    }
}
