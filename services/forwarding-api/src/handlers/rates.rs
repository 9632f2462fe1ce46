//! Rate quote handler

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::instrument;

use suitebox_core::CoreError;
use suitebox_types::ShippingMethod;

use crate::error::{ApiError, ApiResult};
use crate::handlers::shared::record_op_duration;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuoteRequest {
    pub user_id: Option<String>,
    pub weight: Option<f64>,
    pub destination: Option<String>,
    pub method: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RateQuoteResponse {
    pub method: ShippingMethod,
    pub weight: f64,
    pub destination: String,
    pub base_fee: f64,
    pub cost_per_lb: f64,
    pub total_cost: f64,
    pub estimated_delivery: &'static str,
    pub currency: &'static str,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/rates/quote
#[instrument(skip(state, req))]
pub async fn quote_rate(
    State(state): State<AppState>,
    Json(req): Json<RateQuoteRequest>,
) -> ApiResult<Json<RateQuoteResponse>> {
    let start = Instant::now();

    if req.user_id.is_none() {
        return Err(CoreError::Unauthorized.into());
    }

    let weight = req.weight.ok_or(CoreError::MissingField("weight"))?;
    let destination = require_destination(req.destination)?;
    let method_str = req.method.as_deref().ok_or(CoreError::MissingField("method"))?;

    let method: ShippingMethod = method_str
        .parse()
        .map_err(|_| ApiError::from(CoreError::InvalidMethod(method_str.to_string())))?;

    let quote = state
        .resolver
        .quote(method, &destination, weight)
        .await
        .inspect_err(|_| record_op_duration("quote_rate", start, false))?;

    metrics::counter!("forwarding_rate_quotes_total", "method" => method.as_str()).increment(1);
    record_op_duration("quote_rate", start, true);

    Ok(Json(RateQuoteResponse {
        method: quote.method,
        weight: quote.weight_lbs,
        destination,
        base_fee: quote.base_fee,
        cost_per_lb: quote.cost_per_lb,
        total_cost: quote.total_cost,
        estimated_delivery: method.delivery_window(),
        currency: "USD",
    }))
}

/// A blank destination would silently skip the destination-filtered rate
/// lookup, so it is rejected like a missing field.
fn require_destination(destination: Option<String>) -> Result<String, CoreError> {
    match destination {
        Some(d) if !d.trim().is_empty() => Ok(d),
        _ => Err(CoreError::MissingField("destination")),
    }
}
