//! PostgreSQL shipment repository implementation

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::ShipmentRow;
use crate::repo::{CreateShipment, ShipmentRepository};

const SHIPMENT_COLUMNS: &str = "id, user_id, package_ids, shipping_method, destination_address, \
                                cost_usd, status, customs_declaration, tracking_number, created_at";

/// PostgreSQL shipment repository
#[derive(Clone)]
pub struct PgShipmentRepository {
    pool: PgPool,
}

impl PgShipmentRepository {
    /// Create a new shipment repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShipmentRepository for PgShipmentRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<ShipmentRow>> {
        let shipment = sqlx::query_as::<_, ShipmentRow>(&format!(
            "SELECT {SHIPMENT_COLUMNS} FROM shipments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(shipment)
    }

    async fn find_by_user_id(&self, user_id: Uuid, limit: i64) -> DbResult<Vec<ShipmentRow>> {
        let shipments = sqlx::query_as::<_, ShipmentRow>(&format!(
            "SELECT {SHIPMENT_COLUMNS} FROM shipments WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(shipments)
    }

    async fn create(&self, shipment: CreateShipment) -> DbResult<ShipmentRow> {
        let row = sqlx::query_as::<_, ShipmentRow>(&format!(
            r#"
            INSERT INTO shipments (id, user_id, package_ids, shipping_method,
                                   destination_address, cost_usd, status, customs_declaration)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', $7)
            RETURNING {SHIPMENT_COLUMNS}
            "#
        ))
        .bind(shipment.id)
        .bind(shipment.user_id)
        .bind(&shipment.package_ids)
        .bind(&shipment.shipping_method)
        .bind(Json(&shipment.destination_address))
        .bind(shipment.cost_usd)
        .bind(Json(&shipment.customs_declaration))
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
