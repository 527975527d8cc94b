//! # API Errors
//!
//! Error taxonomy of the HTTP layer and its mapping to status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::model::ValidationError;
use crate::store::StoreError;

use super::response::{ErrorResponse, NOT_FOUND_MESSAGE};

/// Result type for item handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to API callers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input (400)
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No item with the requested id (404)
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// Underlying store failure, message passed through (500)
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Store(ref e) = self {
            error!(error = %e, "store operation failed");
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(ValidationError::MissingFields).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(StoreError::Database(sqlx::Error::PoolClosed)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_has_single_field() {
        let body = serde_json::to_value(ErrorResponse::from(ApiError::NotFound)).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Item not found" }));
    }

    #[test]
    fn test_store_message_passes_through() {
        let store_err = StoreError::Database(sqlx::Error::PoolClosed);
        let expected = store_err.to_string();
        assert_eq!(ApiError::from(store_err).to_string(), expected);
    }
}
