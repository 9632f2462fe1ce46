//! Consolidation orchestrator
//!
//! Validates a consolidation request end to end, prices it, then
//! materializes the shipment and its invoices. Steps 1-8 (validation
//! through the shipment insert) are strict preconditions with no partial
//! writes; the package-link update, the two invoices, and the notification
//! are best-effort side effects executed after the shipment exists - a
//! failure there is logged and the shipment remains the authoritative
//! outcome.

use std::sync::Arc;

use chrono::{Duration, Utc};

use suitebox_db::{
    CreateInvoice, CreateNotification, CreateShipment, InvoiceRepository, NotificationRepository,
    PackageRepository, RateRepository, ShipmentRepository, ShipmentRow, UserRepository,
};
use suitebox_types::{
    Address, CostBreakdown, CustomsDeclaration, CustomsItem, InvoiceId, InvoiceType, PackageId,
    ShipmentId, ShippingMethod, SubscriptionTier, UserId,
};

use crate::config::ConsolidationConfig;
use crate::eligibility::EligibilityChecker;
use crate::error::CoreError;
use crate::rates::{tiered_cost, RateResolver};

/// A consolidation request after authentication
#[derive(Debug, Clone)]
pub struct ConsolidationRequest {
    pub user_id: UserId,
    pub package_ids: Vec<PackageId>,
    /// Raw method string; validated here against the four-method enum
    pub shipping_method: Option<String>,
    pub destination_address: Option<Address>,
}

/// The outcome of a successful consolidation
#[derive(Debug, Clone)]
pub struct ConsolidationOutcome {
    pub shipment: ShipmentRow,
    pub cost_breakdown: CostBreakdown,
    pub total_weight: f64,
    pub package_count: usize,
}

/// Consolidation service
///
/// Generic over the repository traits so the whole flow runs against
/// in-memory fakes in tests.
pub struct ConsolidationService<P, U, R, S, I, N>
where
    P: PackageRepository,
    U: UserRepository,
    R: RateRepository,
    S: ShipmentRepository,
    I: InvoiceRepository,
    N: NotificationRepository,
{
    eligibility: EligibilityChecker<P>,
    resolver: RateResolver<R>,
    packages: Arc<P>,
    users: Arc<U>,
    shipments: Arc<S>,
    invoices: Arc<I>,
    notifications: Arc<N>,
    config: ConsolidationConfig,
}

impl<P, U, R, S, I, N> ConsolidationService<P, U, R, S, I, N>
where
    P: PackageRepository,
    U: UserRepository,
    R: RateRepository,
    S: ShipmentRepository,
    I: InvoiceRepository,
    N: NotificationRepository,
{
    /// Create a new consolidation service
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        packages: Arc<P>,
        users: Arc<U>,
        rates: Arc<R>,
        shipments: Arc<S>,
        invoices: Arc<I>,
        notifications: Arc<N>,
        config: ConsolidationConfig,
    ) -> Self {
        Self {
            eligibility: EligibilityChecker::new(Arc::clone(&packages)),
            resolver: RateResolver::new(rates),
            packages,
            users,
            shipments,
            invoices,
            notifications,
            config,
        }
    }

    /// Consolidate a set of packages into one shipment.
    ///
    /// Returns the created shipment with its cost breakdown, or a
    /// validation error raised before anything was written.
    pub async fn consolidate(
        &self,
        req: ConsolidationRequest,
    ) -> Result<ConsolidationOutcome, CoreError> {
        // Required inputs
        if req.package_ids.is_empty() {
            return Err(CoreError::MissingField("packageIds"));
        }
        let method_str = req
            .shipping_method
            .as_deref()
            .ok_or(CoreError::MissingField("shippingMethod"))?;
        let destination = req
            .destination_address
            .clone()
            .ok_or(CoreError::MissingField("destinationAddress"))?;

        // Canonical four-method enum
        let method: ShippingMethod = method_str
            .parse()
            .map_err(|_| CoreError::InvalidMethod(method_str.to_string()))?;

        // Ownership and state checks; read-only
        let packages = self.eligibility.validate(&req.package_ids, req.user_id).await?;

        // Missing weight or value counts as zero
        let total_weight: f64 = packages.iter().map(|p| p.weight_lbs.unwrap_or(0.0)).sum();
        let total_value: f64 = packages.iter().map(|p| p.declared_value.unwrap_or(0.0)).sum();

        let tier = self.lookup_tier(req.user_id).await?;
        let consolidation_fee = tier.consolidation_fee_usd();

        // Rate lookup by method and weight only; the destination dimension
        // is not applied on the consolidation path.
        let rate = self.resolver.resolve(method, total_weight).await?;
        let shipping_cost = tiered_cost(&rate, total_weight)?;
        let total_cost = shipping_cost + consolidation_fee;

        let customs_declaration = CustomsDeclaration {
            total_value,
            items: packages
                .iter()
                .map(|p| CustomsItem {
                    tracking_number: p.tracking_number.clone(),
                    declared_value: p.declared_value,
                    weight_lbs: p.weight_lbs,
                })
                .collect(),
        };

        // Primary write; a failure here aborts the whole operation
        let shipment = self
            .shipments
            .create(CreateShipment {
                id: ShipmentId::new().0,
                user_id: req.user_id.0,
                package_ids: req.package_ids.iter().map(|id| id.0).collect(),
                shipping_method: method.to_string(),
                destination_address: destination,
                cost_usd: total_cost,
                customs_declaration,
            })
            .await?;

        let package_count = req.package_ids.len();
        self.link_packages(&req.package_ids, shipment.shipment_id()).await;
        self.create_invoices(req.user_id, shipment.shipment_id(), consolidation_fee, shipping_cost)
            .await;
        self.notify(req.user_id, shipment.shipment_id(), package_count, total_cost).await;

        tracing::info!(
            user_id = %req.user_id,
            shipment_id = %shipment.shipment_id(),
            package_count,
            total_cost,
            "consolidation created"
        );

        Ok(ConsolidationOutcome {
            shipment,
            cost_breakdown: CostBreakdown { shipping_cost, consolidation_fee, total_cost },
            total_weight,
            package_count,
        })
    }

    async fn lookup_tier(&self, user_id: UserId) -> Result<SubscriptionTier, CoreError> {
        let user = self.users.find_by_id(user_id.0).await?;
        Ok(user
            .map(|u| SubscriptionTier::from_str_or_free(&u.subscription_tier))
            .unwrap_or(SubscriptionTier::Free))
    }

    /// Best-effort: stamp the shipment link onto the packages.
    ///
    /// The update is conditional on a null link; fewer rows affected than
    /// requested means a concurrent consolidation won the race for some of
    /// them, which is logged as a conflict but does not undo the shipment.
    async fn link_packages(&self, package_ids: &[PackageId], shipment_id: ShipmentId) {
        let ids: Vec<_> = package_ids.iter().map(|id| id.0).collect();
        match self.packages.assign_shipment(&ids, shipment_id.0).await {
            Ok(updated) if updated as usize != package_ids.len() => {
                tracing::warn!(
                    %shipment_id,
                    requested = package_ids.len(),
                    updated,
                    "consolidation conflict: some packages were already linked to a shipment"
                );
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(%shipment_id, error = %e, "package link update failed");
            }
        }
    }

    /// Best-effort: one consolidation invoice and one shipping invoice
    async fn create_invoices(
        &self,
        user_id: UserId,
        shipment_id: ShipmentId,
        consolidation_fee: f64,
        shipping_cost: f64,
    ) {
        let due_date = Utc::now() + Duration::days(self.config.invoice_due_days);

        for (invoice_type, amount_usd) in [
            (InvoiceType::Consolidation, consolidation_fee),
            (InvoiceType::Shipping, shipping_cost),
        ] {
            let result = self
                .invoices
                .create(CreateInvoice {
                    id: InvoiceId::new().0,
                    user_id: user_id.0,
                    shipment_id: shipment_id.0,
                    invoice_type: invoice_type.to_string(),
                    amount_usd,
                    due_date,
                })
                .await;

            if let Err(e) = result {
                tracing::error!(
                    %shipment_id,
                    %invoice_type,
                    error = %e,
                    "invoice creation failed"
                );
            }
        }
    }

    /// Best-effort: one notification row describing the consolidation
    async fn notify(
        &self,
        user_id: UserId,
        shipment_id: ShipmentId,
        package_count: usize,
        total_cost: f64,
    ) {
        let result = self
            .notifications
            .create(CreateNotification {
                id: uuid::Uuid::new_v4(),
                user_id: user_id.0,
                kind: "shipment_update".to_string(),
                title: "Consolidation Request Created".to_string(),
                message: format!(
                    "Your consolidation request with {package_count} packages has been created. \
                     Total cost: ${total_cost:.2}"
                ),
                metadata: serde_json::json!({
                    "shipment_id": shipment_id,
                    "package_count": package_count,
                    "total_cost": total_cost,
                }),
            })
            .await;

        if let Err(e) = result {
            tracing::error!(%shipment_id, error = %e, "notification creation failed");
        }
    }
}
