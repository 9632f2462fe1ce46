//! Consolidation handler

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::instrument;

use suitebox_core::{ConsolidationRequest, CoreError};
use suitebox_db::ShipmentRow;
use suitebox_types::{Address, CostBreakdown, CustomsDeclaration, PackageId, UserId};

use crate::error::{ApiError, ApiResult};
use crate::handlers::shared::record_op_duration;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidateRequest {
    pub user_id: Option<String>,
    #[serde(default)]
    pub package_ids: Vec<String>,
    pub shipping_method: Option<String>,
    pub destination_address: Option<Address>,
}

#[derive(Debug, Serialize)]
pub struct ShipmentResponse {
    pub id: String,
    pub user_id: String,
    pub package_ids: Vec<String>,
    pub shipping_method: String,
    pub destination_address: Address,
    pub cost_usd: f64,
    pub status: String,
    pub customs_declaration: CustomsDeclaration,
    pub tracking_number: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct ConsolidateResponse {
    pub success: bool,
    pub shipment: ShipmentResponse,
    pub cost_breakdown: CostBreakdown,
    pub total_weight: f64,
    pub package_count: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/consolidate
#[instrument(skip(state, req))]
pub async fn consolidate(
    State(state): State<AppState>,
    Json(req): Json<ConsolidateRequest>,
) -> ApiResult<Json<ConsolidateResponse>> {
    let start = Instant::now();

    let user_id = req.user_id.as_deref().ok_or(CoreError::Unauthorized)?;
    let user_id =
        UserId::parse(user_id).map_err(|_| ApiError::BadRequest("Invalid userId".into()))?;

    let package_ids = req
        .package_ids
        .iter()
        .map(|id| PackageId::parse(id))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ApiError::BadRequest("Invalid packageIds".into()))?;

    let outcome = state
        .consolidator
        .consolidate(ConsolidationRequest {
            user_id,
            package_ids,
            shipping_method: req.shipping_method,
            destination_address: req.destination_address,
        })
        .await
        .inspect_err(|_| record_op_duration("consolidate", start, false))?;

    metrics::counter!("forwarding_consolidations_total").increment(1);
    record_op_duration("consolidate", start, true);

    Ok(Json(ConsolidateResponse {
        success: true,
        shipment: shipment_to_response(outcome.shipment),
        cost_breakdown: outcome.cost_breakdown,
        total_weight: outcome.total_weight,
        package_count: outcome.package_count,
    }))
}

fn shipment_to_response(row: ShipmentRow) -> ShipmentResponse {
    ShipmentResponse {
        id: row.id.to_string(),
        user_id: row.user_id.to_string(),
        package_ids: row.package_ids.iter().map(|id| id.to_string()).collect(),
        shipping_method: row.shipping_method,
        destination_address: row.destination_address.0,
        cost_usd: row.cost_usd,
        status: row.status,
        customs_declaration: row.customs_declaration.0,
        tracking_number: row.tracking_number,
        created_at: row.created_at.to_rfc3339(),
    }
}
