//! HTTP Error Handling
//!
//! Defines the API error body and the mapping from application errors
//! to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::inference::PredictionError;

/// Standard API error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type mapped onto HTTP status codes
#[derive(Debug)]
pub enum AppError {
    /// Model artifacts could not be loaded
    ModelUnavailable(String),
    /// Unexpected internal error
    Internal(String),
    /// Prediction pipeline error
    Prediction(PredictionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::ModelUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("MODEL_UNAVAILABLE", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Prediction(err) => match err {
                PredictionError::FeaturePreparation(source) => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("BAD_REQUEST", source.to_string()),
                ),
                PredictionError::ModelUnavailable { message } => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ApiError::new("MODEL_UNAVAILABLE", message),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        AppError::Prediction(err)
    }
}
