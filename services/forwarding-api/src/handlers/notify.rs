//! Package-received notification handler

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::instrument;

use suitebox_core::CoreError;
use suitebox_types::UserId;

use crate::error::{ApiError, ApiResult};
use crate::handlers::shared::record_op_duration;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRequest {
    pub user_id: Option<String>,
    pub package_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    pub success: bool,
}

/// POST /api/v1/notify
///
/// Admin-gated: emails a package's owner that it arrived.
#[instrument(skip(state, req))]
pub async fn notify_received(
    State(state): State<AppState>,
    Json(req): Json<NotifyRequest>,
) -> ApiResult<Json<NotifyResponse>> {
    let start = Instant::now();

    let requester = req.user_id.as_deref().ok_or(CoreError::Unauthorized)?;
    let requester =
        UserId::parse(requester).map_err(|_| ApiError::BadRequest("Invalid userId".into()))?;
    let package_id = req.package_id.as_deref().ok_or(CoreError::MissingField("packageId"))?;
    let package_id = uuid::Uuid::parse_str(package_id)
        .map_err(|_| ApiError::BadRequest("Invalid packageId".into()))?;

    state
        .notifier
        .notify_received(requester, package_id)
        .await
        .inspect_err(|_| record_op_duration("notify_received", start, false))?;

    metrics::counter!("forwarding_notifications_sent_total").increment(1);
    record_op_duration("notify_received", start, true);

    Ok(Json(NotifyResponse { success: true }))
}
