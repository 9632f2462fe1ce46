//! PostgreSQL invoice repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::InvoiceRow;
use crate::repo::{CreateInvoice, InvoiceRepository};

const INVOICE_COLUMNS: &str =
    "id, user_id, shipment_id, invoice_type, amount_usd, status, due_date, created_at";

/// PostgreSQL invoice repository
#[derive(Clone)]
pub struct PgInvoiceRepository {
    pool: PgPool,
}

impl PgInvoiceRepository {
    /// Create a new invoice repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for PgInvoiceRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<InvoiceRow>> {
        let invoice = sqlx::query_as::<_, InvoiceRow>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    async fn find_by_user_id(&self, user_id: Uuid, limit: i64) -> DbResult<Vec<InvoiceRow>> {
        let invoices = sqlx::query_as::<_, InvoiceRow>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    async fn create(&self, invoice: CreateInvoice) -> DbResult<InvoiceRow> {
        let row = sqlx::query_as::<_, InvoiceRow>(&format!(
            r#"
            INSERT INTO invoices (id, user_id, shipment_id, invoice_type, amount_usd,
                                  status, due_date)
            VALUES ($1, $2, $3, $4, $5, 'pending', $6)
            RETURNING {INVOICE_COLUMNS}
            "#
        ))
        .bind(invoice.id)
        .bind(invoice.user_id)
        .bind(invoice.shipment_id)
        .bind(&invoice.invoice_type)
        .bind(invoice.amount_usd)
        .bind(invoice.due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_status(&self, id: Uuid, status: &str) -> DbResult<()> {
        sqlx::query("UPDATE invoices SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
