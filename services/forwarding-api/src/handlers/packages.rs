//! Standalone package lifecycle handlers
//!
//! The alternate forwarding model: parcels received into the in-memory
//! store, moved through the state machine, and priced with the
//! region-multiplier freight model.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::instrument;
use uuid::Uuid;

use suitebox_core::{estimated_delivery_date, freight_cost, CoreError, ForwardParcel, ReceiveParcel};
use suitebox_db::ParcelRow;
use suitebox_types::{Dimensions, FreightMethod, ParcelStatus, UserId};

use crate::error::{ApiError, ApiResult};
use crate::handlers::shared::record_op_duration;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivePackageRequest {
    pub user_id: Option<String>,
    pub tracking_number: Option<String>,
    pub description: Option<String>,
    pub weight: Option<f64>,
    pub dimensions: Option<Dimensions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardPackageRequest {
    pub shipping_method: Option<String>,
    pub destination_address: Option<String>,
    pub destination_country: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreightQuoteRequest {
    pub weight: Option<f64>,
    pub shipping_method: Option<String>,
    pub destination: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub id: String,
    pub user_id: String,
    pub tracking_number: String,
    pub description: String,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub status: String,
    pub received_at: Option<String>,
    pub forwarded_at: Option<String>,
    pub delivered_at: Option<String>,
    pub shipping_method: Option<String>,
    pub estimated_delivery: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPackagesResponse {
    pub packages: Vec<PackageResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreightQuoteResponse {
    pub shipping_method: FreightMethod,
    pub weight: f64,
    pub destination: String,
    pub cost: f64,
    pub estimated_delivery: String,
    pub transit_days: i64,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/packages
#[instrument(skip(state, req))]
pub async fn receive_package(
    State(state): State<AppState>,
    Json(req): Json<ReceivePackageRequest>,
) -> ApiResult<(StatusCode, Json<PackageResponse>)> {
    let start = Instant::now();

    let user_id = req.user_id.as_deref().ok_or(CoreError::MissingField("userId"))?;
    let user_id =
        UserId::parse(user_id).map_err(|_| ApiError::BadRequest("Invalid userId".into()))?;
    let tracking_number =
        req.tracking_number.ok_or(CoreError::MissingField("trackingNumber"))?;
    let weight = req.weight.ok_or(CoreError::MissingField("weight"))?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(CoreError::InvalidWeight(weight).into());
    }

    let parcel = state
        .lifecycle
        .receive(ReceiveParcel {
            user_id,
            tracking_number,
            description: req.description.unwrap_or_default(),
            weight_kg: weight,
            dimensions: req
                .dimensions
                .unwrap_or(Dimensions { length: 0.0, width: 0.0, height: 0.0 }),
        })
        .await?;

    metrics::counter!("forwarding_parcels_received_total").increment(1);
    record_op_duration("receive_package", start, true);

    Ok((StatusCode::CREATED, Json(parcel_to_response(parcel))))
}

/// GET /api/v1/packages
#[instrument(skip(state))]
pub async fn list_packages(State(state): State<AppState>) -> ApiResult<Json<ListPackagesResponse>> {
    let packages = state.lifecycle.list().await?;
    Ok(Json(ListPackagesResponse {
        packages: packages.into_iter().map(parcel_to_response).collect(),
    }))
}

/// GET /api/v1/packages/:id
#[instrument(skip(state), fields(package_id = %package_id))]
pub async fn get_package(
    State(state): State<AppState>,
    Path(package_id): Path<Uuid>,
) -> ApiResult<Json<PackageResponse>> {
    let parcel = state.lifecycle.get(package_id).await?;
    Ok(Json(parcel_to_response(parcel)))
}

/// GET /api/v1/users/:id/packages
#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn list_user_packages(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<ListPackagesResponse>> {
    let packages = state.lifecycle.list_for_user(UserId(user_id)).await?;
    Ok(Json(ListPackagesResponse {
        packages: packages.into_iter().map(parcel_to_response).collect(),
    }))
}

/// DELETE /api/v1/packages/:id
#[instrument(skip(state), fields(package_id = %package_id))]
pub async fn delete_package(
    State(state): State<AppState>,
    Path(package_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.lifecycle.delete(package_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/packages/:id/status
#[instrument(skip(state, req), fields(package_id = %package_id))]
pub async fn update_package_status(
    State(state): State<AppState>,
    Path(package_id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<Json<PackageResponse>> {
    let status_str = req.status.as_deref().ok_or(CoreError::MissingField("status"))?;
    let status: ParcelStatus = status_str
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid status: {status_str}")))?;

    let parcel = state.lifecycle.update_status(package_id, status).await?;
    Ok(Json(parcel_to_response(parcel)))
}

/// POST /api/v1/packages/:id/forward
#[instrument(skip(state, req), fields(package_id = %package_id))]
pub async fn forward_package(
    State(state): State<AppState>,
    Path(package_id): Path<Uuid>,
    Json(req): Json<ForwardPackageRequest>,
) -> ApiResult<Json<PackageResponse>> {
    let start = Instant::now();

    let method_str =
        req.shipping_method.as_deref().ok_or(CoreError::MissingField("shippingMethod"))?;
    let method: FreightMethod = method_str
        .parse()
        .map_err(|_| ApiError::from(CoreError::InvalidMethod(method_str.to_string())))?;
    let destination_address =
        req.destination_address.ok_or(CoreError::MissingField("destinationAddress"))?;
    let destination_country =
        req.destination_country.ok_or(CoreError::MissingField("destinationCountry"))?;

    let parcel = state
        .lifecycle
        .forward(ForwardParcel {
            parcel_id: package_id,
            shipping_method: method,
            destination_address,
            destination_country,
            estimated_delivery: estimated_delivery_date(method),
        })
        .await
        .inspect_err(|_| record_op_duration("forward_package", start, false))?;

    metrics::counter!("forwarding_parcels_forwarded_total", "method" => method.as_str())
        .increment(1);
    record_op_duration("forward_package", start, true);

    Ok(Json(parcel_to_response(parcel)))
}

/// POST /api/v1/packages/quote
///
/// Stateless: the region model has no configuration beyond the fixed
/// rate card.
#[instrument(skip(req))]
pub async fn quote_freight(
    Json(req): Json<FreightQuoteRequest>,
) -> ApiResult<Json<FreightQuoteResponse>> {
    let weight = req.weight.ok_or(CoreError::MissingField("weight"))?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(CoreError::InvalidWeight(weight).into());
    }
    let method_str =
        req.shipping_method.as_deref().ok_or(CoreError::MissingField("shippingMethod"))?;
    let method: FreightMethod = method_str
        .parse()
        .map_err(|_| ApiError::from(CoreError::InvalidMethod(method_str.to_string())))?;
    let destination = req.destination.ok_or(CoreError::MissingField("destination"))?;

    let cost = freight_cost(weight, method, &destination);

    Ok(Json(FreightQuoteResponse {
        shipping_method: method,
        weight,
        destination,
        cost,
        estimated_delivery: estimated_delivery_date(method).to_rfc3339(),
        transit_days: method.transit_days(),
    }))
}

fn parcel_to_response(parcel: ParcelRow) -> PackageResponse {
    PackageResponse {
        id: parcel.id.to_string(),
        user_id: parcel.user_id.to_string(),
        tracking_number: parcel.tracking_number,
        description: parcel.description,
        weight: parcel.weight_kg,
        dimensions: Dimensions {
            length: parcel.length_cm,
            width: parcel.width_cm,
            height: parcel.height_cm,
        },
        status: parcel.status,
        received_at: parcel.received_at.map(|t| t.to_rfc3339()),
        forwarded_at: parcel.forwarded_at.map(|t| t.to_rfc3339()),
        delivered_at: parcel.delivered_at.map(|t| t.to_rfc3339()),
        shipping_method: parcel.shipping_method,
        estimated_delivery: parcel.estimated_delivery.map(|t| t.to_rfc3339()),
    }
}
