//! Mock repositories for testing
//!
//! In-memory implementations of the suitebox-db traits. The write-side
//! mocks carry a failure toggle so tests can exercise the best-effort
//! side-effect handling of the consolidation orchestrator.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use suitebox_db::{
    CreateInvoice, CreateNotification, CreateShipment, DbError, DbResult, InvoiceRepository,
    InvoiceRow, NotificationRepository, NotificationRow, PackageRepository, PackageRow,
    RateRepository, RateRow, ShipmentRepository, ShipmentRow, UserRepository, UserRow,
};

fn injected_failure() -> DbError {
    DbError::Sqlx(sqlx::Error::PoolClosed)
}

/// In-memory package repository
#[derive(Default, Clone)]
pub struct MockPackageRepository {
    packages: Arc<DashMap<Uuid, PackageRow>>,
    fail_assign: Arc<AtomicBool>,
}

impl MockPackageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a test package directly
    pub fn insert_package(&self, package: PackageRow) {
        self.packages.insert(package.id, package);
    }

    /// Make the next assign_shipment calls fail
    pub fn fail_assign_shipment(&self, fail: bool) {
        self.fail_assign.store(fail, Ordering::SeqCst);
    }

    /// Fetch a package regardless of owner (test inspection)
    pub fn get(&self, id: Uuid) -> Option<PackageRow> {
        self.packages.get(&id).map(|r| r.value().clone())
    }
}

#[async_trait]
impl PackageRepository for MockPackageRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PackageRow>> {
        Ok(self.packages.get(&id).map(|r| r.value().clone()))
    }

    async fn find_for_user(&self, ids: &[Uuid], user_id: Uuid) -> DbResult<Vec<PackageRow>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.packages.get(id))
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Vec<PackageRow>> {
        Ok(self
            .packages
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect())
    }

    async fn assign_shipment(&self, ids: &[Uuid], shipment_id: Uuid) -> DbResult<u64> {
        if self.fail_assign.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        let mut updated = 0;
        for id in ids {
            if let Some(mut pkg) = self.packages.get_mut(id) {
                if pkg.consolidated_shipment_id.is_none() {
                    pkg.consolidated_shipment_id = Some(shipment_id);
                    updated += 1;
                }
            }
        }
        Ok(updated)
    }
}

/// In-memory user repository
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: UserRow) {
        self.users.insert(user.id, user);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .users
            .iter()
            .find(|r| r.value().email == email)
            .map(|r| r.value().clone()))
    }

    async fn update_tier(&self, id: Uuid, tier: &str) -> DbResult<()> {
        if let Some(mut user) = self.users.get_mut(&id) {
            user.subscription_tier = tier.to_string();
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

/// In-memory rate table
#[derive(Default, Clone)]
pub struct MockRateRepository {
    rates: Arc<DashMap<Uuid, RateRow>>,
}

impl MockRateRepository {
    /// An empty rate table; every lookup falls through to the defaults
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a configured rate row
    pub fn insert_rate(&self, rate: RateRow) {
        self.rates.insert(rate.id, rate);
    }
}

#[async_trait]
impl RateRepository for MockRateRepository {
    async fn find_band(&self, method: &str, weight_lbs: f64) -> DbResult<Option<RateRow>> {
        Ok(self
            .rates
            .iter()
            .find(|r| {
                let rate = r.value();
                rate.method == method
                    && rate.weight_min_lbs <= weight_lbs
                    && rate.weight_max_lbs >= weight_lbs
            })
            .map(|r| r.value().clone()))
    }

    async fn find_band_for_destination(
        &self,
        method: &str,
        destination_country: &str,
        weight_lbs: f64,
    ) -> DbResult<Option<RateRow>> {
        Ok(self
            .rates
            .iter()
            .find(|r| {
                let rate = r.value();
                rate.method == method
                    && rate.destination_country.as_deref() == Some(destination_country)
                    && rate.weight_min_lbs <= weight_lbs
                    && rate.weight_max_lbs >= weight_lbs
            })
            .map(|r| r.value().clone()))
    }
}

/// In-memory shipment repository
#[derive(Default, Clone)]
pub struct MockShipmentRepository {
    shipments: Arc<DashMap<Uuid, ShipmentRow>>,
    fail_create: Arc<AtomicBool>,
}

impl MockShipmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make shipment creation fail
    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Number of shipments created
    pub fn created_count(&self) -> usize {
        self.shipments.len()
    }
}

#[async_trait]
impl ShipmentRepository for MockShipmentRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<ShipmentRow>> {
        Ok(self.shipments.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_user_id(&self, user_id: Uuid, limit: i64) -> DbResult<Vec<ShipmentRow>> {
        let mut rows: Vec<_> = self
            .shipments
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn create(&self, shipment: CreateShipment) -> DbResult<ShipmentRow> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        let row = ShipmentRow {
            id: shipment.id,
            user_id: shipment.user_id,
            package_ids: shipment.package_ids,
            shipping_method: shipment.shipping_method,
            destination_address: sqlx::types::Json(shipment.destination_address),
            cost_usd: shipment.cost_usd,
            status: "pending".to_string(),
            customs_declaration: sqlx::types::Json(shipment.customs_declaration),
            tracking_number: None,
            created_at: Utc::now(),
        };
        self.shipments.insert(row.id, row.clone());
        Ok(row)
    }
}

/// In-memory invoice repository
#[derive(Default, Clone)]
pub struct MockInvoiceRepository {
    invoices: Arc<DashMap<Uuid, InvoiceRow>>,
    fail_create: Arc<AtomicBool>,
}

impl MockInvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make invoice creation fail
    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// All invoices for a shipment
    pub fn for_shipment(&self, shipment_id: Uuid) -> Vec<InvoiceRow> {
        self.invoices
            .iter()
            .filter(|r| r.value().shipment_id == shipment_id)
            .map(|r| r.value().clone())
            .collect()
    }
}

#[async_trait]
impl InvoiceRepository for MockInvoiceRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<InvoiceRow>> {
        Ok(self.invoices.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_user_id(&self, user_id: Uuid, limit: i64) -> DbResult<Vec<InvoiceRow>> {
        let mut rows: Vec<_> = self
            .invoices
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn create(&self, invoice: CreateInvoice) -> DbResult<InvoiceRow> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        let row = InvoiceRow {
            id: invoice.id,
            user_id: invoice.user_id,
            shipment_id: invoice.shipment_id,
            invoice_type: invoice.invoice_type,
            amount_usd: invoice.amount_usd,
            status: "pending".to_string(),
            due_date: invoice.due_date,
            created_at: Utc::now(),
        };
        self.invoices.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update_status(&self, id: Uuid, status: &str) -> DbResult<()> {
        if let Some(mut invoice) = self.invoices.get_mut(&id) {
            invoice.status = status.to_string();
        }
        Ok(())
    }
}

/// In-memory notification repository
#[derive(Default, Clone)]
pub struct MockNotificationRepository {
    notifications: Arc<DashMap<Uuid, NotificationRow>>,
    fail_create: Arc<AtomicBool>,
}

impl MockNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make notification creation fail
    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Number of notifications created
    pub fn created_count(&self) -> usize {
        self.notifications.len()
    }
}

#[async_trait]
impl NotificationRepository for MockNotificationRepository {
    async fn create(&self, notification: CreateNotification) -> DbResult<NotificationRow> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        let row = NotificationRow {
            id: notification.id,
            user_id: notification.user_id,
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            metadata: sqlx::types::Json(notification.metadata),
            created_at: Utc::now(),
        };
        self.notifications.insert(row.id, row.clone());
        Ok(row)
    }
}
