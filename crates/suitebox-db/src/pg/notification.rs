//! PostgreSQL notification repository implementation

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::NotificationRow;
use crate::repo::{CreateNotification, NotificationRepository};

/// PostgreSQL notification repository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new notification repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn create(&self, notification: CreateNotification) -> DbResult<NotificationRow> {
        let row = sqlx::query_as::<_, NotificationRow>(
            r#"
            INSERT INTO notifications (id, user_id, kind, title, message, metadata)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, kind, title, message, metadata, created_at
            "#,
        )
        .bind(notification.id)
        .bind(notification.user_id)
        .bind(&notification.kind)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(Json(&notification.metadata))
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
