//! Settlement policy configuration
//!
//! The date windows approval terms derive from, kept as named
//! configuration so tests (and deployments) can vary them.

use serde::Deserialize;

/// Windows applied when an approval or info request leaves them unset
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SettlementPolicy {
    /// Days a financial-aid grant stays valid when the approver does not
    /// supply a date
    pub aid_validity_days: u64,
    /// Days until a requires-more-info follow-up is due
    pub follow_up_days: u64,
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            aid_validity_days: 30,
            follow_up_days: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_windows() {
        let policy = SettlementPolicy::default();
        assert_eq!(policy.aid_validity_days, 30);
        assert_eq!(policy.follow_up_days, 7);
    }

    #[test]
    fn test_deserialize_with_partial_overrides() {
        let policy: SettlementPolicy =
            serde_json::from_str(r#"{ "follow_up_days": 3 }"#).unwrap();
        assert_eq!(policy.follow_up_days, 3);
        assert_eq!(policy.aid_validity_days, 30);
    }
}
