//! HTTP Request Handlers
//!
//! Implements all REST API endpoint handlers. Scoring is CPU-bound and
//! runs on the blocking pool; only live weather lookups stay on the
//! async side.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::dto::{
    AirlinesResponse, CitiesResponse, FlightRequest, HealthResponse, PredictResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::features::calendar;
use crate::inference::{InferenceContext, PredictionError, PredictionResult, Predictor};

/// Result type alias for handler functions
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// POST /predict - Score one flight request
///
/// Returns the corrected cancellation decision plus either a cause
/// distribution (cancelled) or a delay distribution (operating).
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<FlightRequest>,
) -> HandlerResult<PredictResponse> {
    let snapshot = match state.enrichment.as_ref() {
        Some(enrichment) => {
            let date =
                calendar::parse_flight_date(&request.date).map_err(PredictionError::from)?;
            Some(enrichment.snapshot_for(&request.origin, date).await)
        }
        None => None,
    };

    let result = tokio::task::spawn_blocking(
        move || -> Result<PredictionResult, PredictionError> {
            let context = state.context_or_reload()?;
            let predictor = Predictor::new(context);
            match snapshot {
                Some(snapshot) => predictor.predict_with_snapshot(&request, &snapshot),
                None => predictor.predict(&request),
            }
        },
    )
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(PredictResponse::from(result)))
}

/// GET /airlines - Airline vocabulary of the loaded label encoder
pub async fn list_airlines(State(state): State<AppState>) -> HandlerResult<AirlinesResponse> {
    let context = load_context(state).await?;

    Ok(Json(AirlinesResponse {
        airlines: context.airline_encoder.classes().to_vec(),
    }))
}

/// GET /cities - City vocabulary of the loaded label encoder
pub async fn list_cities(State(state): State<AppState>) -> HandlerResult<CitiesResponse> {
    let context = load_context(state).await?;

    Ok(Json(CitiesResponse {
        cities: context.city_encoder.classes().to_vec(),
    }))
}

/// GET /health - Health check endpoint
///
/// Reports liveness without forcing an artifact load.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let models = if state.context().is_some() {
        "loaded"
    } else {
        "not loaded"
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        models: models.to_string(),
    })
}

async fn load_context(state: AppState) -> Result<Arc<InferenceContext>, AppError> {
    tokio::task::spawn_blocking(move || state.context_or_reload())
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
        .map_err(|e| AppError::ModelUnavailable(e.to_string()))
}
