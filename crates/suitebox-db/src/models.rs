//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.
//! The parcel row is the one exception: it backs the in-memory forwarding
//! store and never touches PostgreSQL.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use suitebox_types::{Address, CustomsDeclaration};

/// User row from the database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub home_country: Option<String>,
    pub suite_number: String,
    pub subscription_tier: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Warehouse package row from the database
#[derive(Debug, Clone, FromRow)]
pub struct PackageRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tracking_number: String,
    pub carrier: Option<String>,
    pub weight_lbs: Option<f64>,
    pub length_in: Option<f64>,
    pub width_in: Option<f64>,
    pub height_in: Option<f64>,
    pub declared_value: Option<f64>,
    pub status: String,
    pub received_at: DateTime<Utc>,
    pub consolidated_shipment_id: Option<Uuid>,
}

/// Shipment row from the database
#[derive(Debug, Clone, FromRow)]
pub struct ShipmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub package_ids: Vec<Uuid>,
    pub shipping_method: String,
    pub destination_address: Json<Address>,
    pub cost_usd: f64,
    pub status: String,
    pub customs_declaration: Json<CustomsDeclaration>,
    pub tracking_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Invoice row from the database
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub shipment_id: Uuid,
    pub invoice_type: String,
    pub amount_usd: f64,
    pub status: String,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Configured shipping rate row from the database
///
/// Weight bands are inclusive on both ends.
#[derive(Debug, Clone, FromRow)]
pub struct RateRow {
    pub id: Uuid,
    pub method: String,
    pub destination_country: Option<String>,
    pub weight_min_lbs: f64,
    pub weight_max_lbs: f64,
    pub base_fee: f64,
    pub cost_per_lb: f64,
}

/// Notification row from the database
#[derive(Debug, Clone, FromRow)]
pub struct NotificationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub metadata: Json<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Standalone parcel record (in-memory forwarding model)
///
/// Weight is kilograms and dimensions centimeters, unlike the pound-based
/// warehouse packages.
#[derive(Debug, Clone)]
pub struct ParcelRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tracking_number: String,
    pub description: String,
    pub weight_kg: f64,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub status: String,
    pub received_at: Option<DateTime<Utc>>,
    pub forwarded_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub shipping_method: Option<String>,
    pub estimated_delivery: Option<DateTime<Utc>>,
}

// Conversion helpers from row types to suitebox-types domain ids
impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> suitebox_types::UserId {
        suitebox_types::UserId(self.id)
    }
}

impl PackageRow {
    /// Convert to domain PackageId
    pub fn package_id(&self) -> suitebox_types::PackageId {
        suitebox_types::PackageId(self.id)
    }

    /// Convert to domain UserId
    pub fn user_id(&self) -> suitebox_types::UserId {
        suitebox_types::UserId(self.user_id)
    }
}

impl ShipmentRow {
    /// Convert to domain ShipmentId
    pub fn shipment_id(&self) -> suitebox_types::ShipmentId {
        suitebox_types::ShipmentId(self.id)
    }
}
