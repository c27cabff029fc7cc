//! Service package read model

use serde::{Deserialize, Serialize};

use core_kernel::{Money, ServicePackageId};

/// Billing duration of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageDuration {
    Monthly,
    Yearly,
    /// One-off purchase, never expires
    OneTime,
}

/// A fixed service package from the catalogue
///
/// Owned by the catalogue collaborator; the settlement layer only reads
/// the duration to derive expiry dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicePackage {
    pub id: ServicePackageId,
    pub name: String,
    pub price: Money,
    pub duration: PackageDuration,
}

impl ServicePackage {
    pub fn new(
        id: ServicePackageId,
        name: impl Into<String>,
        price: Money,
        duration: PackageDuration,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            duration,
        }
    }
}
