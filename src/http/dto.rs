//! Data Transfer Objects
//!
//! Request and response bodies for the REST API. The request body is the
//! domain [`FlightRequest`] itself; responses are shaped here so the wire
//! format stays stable even when internal result types evolve.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::inference::{PredictionOutcome, PredictionResult};

pub use crate::models::FlightRequest;

/// Response body of `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predictions: Predictions,
}

/// Full prediction block for one flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predictions {
    /// Final cancellation decision after correction
    pub cancelled: bool,
    /// Corrected class probabilities of the cancellation model
    pub cancelled_probability: ProbabilityPair,
    /// Probability of the predicted class
    pub confidence: f64,
    /// Heuristic corrections applied to the raw model output
    pub model_adjustments: ModelAdjustments,
    /// Predicted cancellation cause, present only when cancelled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_code: Option<String>,
    /// Cause label to probability, present only when cancelled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_code_probabilities: Option<BTreeMap<String, f64>>,
    /// Delay prediction, present only when not cancelled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<DelayPrediction>,
}

/// Two-class probability vector of the cancellation model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbabilityPair {
    pub not_cancelled: f64,
    pub cancelled: f64,
}

/// Record of the multiplicative probability correction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelAdjustments {
    pub corrections_applied: Vec<String>,
    pub correction_factor: f64,
    pub threshold_used: f64,
}

/// Delay class and distribution for flights predicted to operate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayPrediction {
    pub delay_class: String,
    pub delay_probabilities: BTreeMap<String, f64>,
}

/// Response body of `GET /airlines`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirlinesResponse {
    pub airlines: Vec<String>,
}

/// Response body of `GET /cities`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}

/// Response body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub models: String,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        let mut predictions = Predictions {
            cancelled: result.cancelled,
            cancelled_probability: ProbabilityPair {
                not_cancelled: result.not_cancelled_probability,
                cancelled: result.cancelled_probability,
            },
            confidence: result.confidence,
            model_adjustments: ModelAdjustments {
                corrections_applied: result
                    .corrections_applied
                    .iter()
                    .map(|reason| reason.to_string())
                    .collect(),
                correction_factor: result.correction_factor,
                threshold_used: result.threshold,
            },
            cancellation_code: None,
            cancellation_code_probabilities: None,
            delay: None,
        };

        match result.outcome {
            PredictionOutcome::Cancellation {
                cause,
                probabilities,
            } => {
                predictions.cancellation_code = Some(cause);
                predictions.cancellation_code_probabilities =
                    Some(probabilities.into_iter().collect());
            }
            PredictionOutcome::Delay {
                class,
                probabilities,
            } => {
                predictions.delay = Some(DelayPrediction {
                    delay_class: class,
                    delay_probabilities: probabilities.into_iter().collect(),
                });
            }
        }

        Self { predictions }
    }
}
