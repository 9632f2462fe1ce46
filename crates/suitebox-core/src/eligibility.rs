//! Package eligibility validation for consolidation

use std::sync::Arc;

use suitebox_db::{PackageRepository, PackageRow};
use suitebox_types::{PackageId, PackageStatus, UserId};

use crate::error::CoreError;

/// Validates that a package set may be consolidated by a requester
pub struct EligibilityChecker<P: PackageRepository> {
    packages: Arc<P>,
}

impl<P: PackageRepository> EligibilityChecker<P> {
    /// Create a new checker over a package repository
    pub fn new(packages: Arc<P>) -> Self {
        Self { packages }
    }

    /// Fetch and validate the requested packages.
    ///
    /// Fails with [`CoreError::OwnershipOrNotFound`] when the owner-scoped
    /// fetch returns fewer rows than requested (missing and foreign-owned
    /// packages are indistinguishable on purpose), and with
    /// [`CoreError::InvalidState`] when any package is outside
    /// received/stored or already linked to a shipment. Read-only.
    pub async fn validate(
        &self,
        package_ids: &[PackageId],
        requester: UserId,
    ) -> Result<Vec<PackageRow>, CoreError> {
        let ids: Vec<_> = package_ids.iter().map(|id| id.0).collect();
        let packages = self.packages.find_for_user(&ids, requester.0).await?;

        if packages.len() != package_ids.len() {
            return Err(CoreError::OwnershipOrNotFound);
        }

        for pkg in &packages {
            // A non-null shipment link means the package already belongs to
            // an active shipment, whatever its status string says.
            if pkg.consolidated_shipment_id.is_some() {
                return Err(CoreError::InvalidState);
            }

            let consolidatable = pkg
                .status
                .parse::<PackageStatus>()
                .map(|s| s.is_consolidatable())
                .unwrap_or(false);
            if !consolidatable {
                return Err(CoreError::InvalidState);
            }
        }

        Ok(packages)
    }
}
