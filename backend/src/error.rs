//! Error handling for the Disaster Response Coordination Platform
//!
//! Every failure is converted once, at the endpoint boundary, into a
//! fixed-shape `{ "error": "..." }` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::ValidationError;
use thiserror::Error;

use crate::external::GenerationError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    // External service errors
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: GenerationError,
    },

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Wrap a generation failure with the message shown to users
    pub fn upstream(message: &'static str, source: GenerationError) -> Self {
        AppError::Upstream { message, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidRequestBody(_) | AppError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Upstream { .. } | AppError::Internal(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to users
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::InvalidRequestBody(_) => "Invalid request body".to_string(),
            AppError::InvalidQuery(_) => "Invalid query string".to_string(),
            AppError::Upstream { message, .. } => message.to_string(),
            AppError::Internal(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_client_error() {
            tracing::warn!("Rejected request: {}", self);
        } else {
            tracing::error!("Error: {:?}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::from(ValidationError::MissingFields(vec!["location"]));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Missing required fields (location)");
    }

    #[test]
    fn test_rejected_query_is_bad_request() {
        let err = AppError::InvalidQuery("duplicate field `disasterType`".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Invalid query string");
    }

    #[test]
    fn test_upstream_hides_source() {
        let err = AppError::upstream("Failed to generate prediction", GenerationError::EmptyResponse);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to generate prediction");
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_internal_is_generic() {
        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.public_message(), "Internal server error");
    }
}
