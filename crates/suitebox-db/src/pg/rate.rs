//! PostgreSQL shipping rate repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::RateRow;
use crate::repo::RateRepository;

const RATE_COLUMNS: &str =
    "id, method, destination_country, weight_min_lbs, weight_max_lbs, base_fee, cost_per_lb";

/// PostgreSQL shipping rate repository
#[derive(Clone)]
pub struct PgRateRepository {
    pool: PgPool,
}

impl PgRateRepository {
    /// Create a new rate repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RateRepository for PgRateRepository {
    async fn find_band(&self, method: &str, weight_lbs: f64) -> DbResult<Option<RateRow>> {
        // Bands are inclusive on both ends.
        let rate = sqlx::query_as::<_, RateRow>(&format!(
            "SELECT {RATE_COLUMNS} FROM shipping_rates \
             WHERE method = $1 AND weight_min_lbs <= $2 AND weight_max_lbs >= $2 \
             ORDER BY weight_min_lbs LIMIT 1"
        ))
        .bind(method)
        .bind(weight_lbs)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rate)
    }

    async fn find_band_for_destination(
        &self,
        method: &str,
        destination_country: &str,
        weight_lbs: f64,
    ) -> DbResult<Option<RateRow>> {
        let rate = sqlx::query_as::<_, RateRow>(&format!(
            "SELECT {RATE_COLUMNS} FROM shipping_rates \
             WHERE method = $1 AND destination_country = $2 \
               AND weight_min_lbs <= $3 AND weight_max_lbs >= $3 \
             ORDER BY weight_min_lbs LIMIT 1"
        ))
        .bind(method)
        .bind(destination_country)
        .bind(weight_lbs)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rate)
    }
}
