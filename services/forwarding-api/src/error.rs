//! Error types for the Forwarding API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use suitebox_core::CoreError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error")]
    Database(#[from] suitebox_db::DbError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Core(core) => match core {
                CoreError::Unauthorized => StatusCode::UNAUTHORIZED,
                CoreError::MissingField(_)
                | CoreError::InvalidMethod(_)
                | CoreError::InvalidWeight(_)
                | CoreError::InvalidState
                | CoreError::InvalidTransition(_) => StatusCode::BAD_REQUEST,
                CoreError::OwnershipOrNotFound | CoreError::NotFound => StatusCode::NOT_FOUND,
                CoreError::Forbidden => StatusCode::FORBIDDEN,
                CoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Core(core) => match core {
                CoreError::Unauthorized => "UNAUTHORIZED",
                CoreError::MissingField(_) => "MISSING_FIELD",
                CoreError::InvalidMethod(_) => "INVALID_METHOD",
                CoreError::InvalidWeight(_) => "INVALID_WEIGHT",
                // Ownership failures answer exactly like missing records
                CoreError::OwnershipOrNotFound | CoreError::NotFound => "NOT_FOUND",
                CoreError::InvalidState => "INVALID_STATE",
                CoreError::InvalidTransition(_) => "INVALID_TRANSITION",
                CoreError::Forbidden => "FORBIDDEN",
                CoreError::Database(_) => "INTERNAL_ERROR",
            },
            Self::Database(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Log internal errors; the response body never carries driver detail
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "Internal API error");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
