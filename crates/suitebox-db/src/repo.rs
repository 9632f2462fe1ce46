//! Repository traits
//!
//! Define async repository interfaces for database operations. Business
//! logic in suitebox-core depends only on these traits, never on a
//! concrete store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use suitebox_types::{Address, CustomsDeclaration};

use crate::error::DbResult;
use crate::models::*;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;

    /// Update a user's subscription tier
    async fn update_tier(&self, id: Uuid, tier: &str) -> DbResult<()>;
}

/// Warehouse package repository trait
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Find a package by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PackageRow>>;

    /// Find packages by ID, restricted to the given owner
    async fn find_for_user(&self, ids: &[Uuid], user_id: Uuid) -> DbResult<Vec<PackageRow>>;

    /// List all packages for an owner
    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Vec<PackageRow>>;

    /// Link packages to a consolidating shipment.
    ///
    /// Only rows whose shipment link is currently null are updated; returns
    /// the number of rows affected so callers can detect a consolidation
    /// conflict.
    async fn assign_shipment(&self, ids: &[Uuid], shipment_id: Uuid) -> DbResult<u64>;
}

/// Shipment repository trait
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Find a shipment by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<ShipmentRow>>;

    /// List shipments for an owner, newest first
    async fn find_by_user_id(&self, user_id: Uuid, limit: i64) -> DbResult<Vec<ShipmentRow>>;

    /// Create a new shipment with status `pending`
    async fn create(&self, shipment: CreateShipment) -> DbResult<ShipmentRow>;
}

/// Create shipment input
#[derive(Debug, Clone)]
pub struct CreateShipment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub package_ids: Vec<Uuid>,
    pub shipping_method: String,
    pub destination_address: Address,
    pub cost_usd: f64,
    pub customs_declaration: CustomsDeclaration,
}

/// Invoice repository trait
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Find an invoice by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<InvoiceRow>>;

    /// List invoices for an owner, newest first
    async fn find_by_user_id(&self, user_id: Uuid, limit: i64) -> DbResult<Vec<InvoiceRow>>;

    /// Create a new invoice with status `pending`
    async fn create(&self, invoice: CreateInvoice) -> DbResult<InvoiceRow>;

    /// Update invoice status (payment-webhook collaborator path)
    async fn update_status(&self, id: Uuid, status: &str) -> DbResult<()>;
}

/// Create invoice input
#[derive(Debug, Clone)]
pub struct CreateInvoice {
    pub id: Uuid,
    pub user_id: Uuid,
    pub shipment_id: Uuid,
    pub invoice_type: String,
    pub amount_usd: f64,
    pub due_date: DateTime<Utc>,
}

/// Shipping rate repository trait
#[async_trait]
pub trait RateRepository: Send + Sync {
    /// Find the configured rate whose band contains `weight_lbs` for a
    /// method, ignoring the destination dimension
    async fn find_band(&self, method: &str, weight_lbs: f64) -> DbResult<Option<RateRow>>;

    /// Find the configured rate whose band contains `weight_lbs` for a
    /// method and destination country
    async fn find_band_for_destination(
        &self,
        method: &str,
        destination_country: &str,
        weight_lbs: f64,
    ) -> DbResult<Option<RateRow>>;
}

/// Notification repository trait
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Create a notification row
    async fn create(&self, notification: CreateNotification) -> DbResult<NotificationRow>;
}

/// Create notification input
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub metadata: serde_json::Value,
}

/// Standalone parcel repository trait
///
/// Capability set for the forwarding state machine: get by id, get by
/// owner, upsert, delete. The lifecycle rules live in suitebox-core and
/// only ever touch this interface.
#[async_trait]
pub trait ParcelRepository: Send + Sync {
    /// Find a parcel by ID
    async fn get(&self, id: Uuid) -> DbResult<Option<ParcelRow>>;

    /// List parcels for an owner
    async fn list_for_owner(&self, user_id: Uuid) -> DbResult<Vec<ParcelRow>>;

    /// List every parcel in the store
    async fn list(&self) -> DbResult<Vec<ParcelRow>>;

    /// Insert or replace a parcel record
    async fn upsert(&self, parcel: ParcelRow) -> DbResult<ParcelRow>;

    /// Delete a parcel record
    async fn delete(&self, id: Uuid) -> DbResult<()>;
}
