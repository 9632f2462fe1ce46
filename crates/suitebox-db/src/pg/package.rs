//! PostgreSQL package repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::PackageRow;
use crate::repo::PackageRepository;

const PACKAGE_COLUMNS: &str = "id, user_id, tracking_number, carrier, weight_lbs, length_in, \
                               width_in, height_in, declared_value, status, received_at, \
                               consolidated_shipment_id";

/// PostgreSQL package repository
#[derive(Clone)]
pub struct PgPackageRepository {
    pool: PgPool,
}

impl PgPackageRepository {
    /// Create a new package repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PackageRepository for PgPackageRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PackageRow>> {
        let package = sqlx::query_as::<_, PackageRow>(&format!(
            "SELECT {PACKAGE_COLUMNS} FROM packages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(package)
    }

    async fn find_for_user(&self, ids: &[Uuid], user_id: Uuid) -> DbResult<Vec<PackageRow>> {
        let packages = sqlx::query_as::<_, PackageRow>(&format!(
            "SELECT {PACKAGE_COLUMNS} FROM packages WHERE id = ANY($1) AND user_id = $2"
        ))
        .bind(ids)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(packages)
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Vec<PackageRow>> {
        let packages = sqlx::query_as::<_, PackageRow>(&format!(
            "SELECT {PACKAGE_COLUMNS} FROM packages WHERE user_id = $1 ORDER BY received_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(packages)
    }

    async fn assign_shipment(&self, ids: &[Uuid], shipment_id: Uuid) -> DbResult<u64> {
        // Conditional on a null link so a concurrent consolidation cannot
        // steal packages that another shipment already claimed.
        let result = sqlx::query(
            r#"
            UPDATE packages
            SET consolidated_shipment_id = $1
            WHERE id = ANY($2) AND consolidated_shipment_id IS NULL
            "#,
        )
        .bind(shipment_id)
        .bind(ids)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
