//! Chained inference over the loaded artifact bundle.
//!
//! ```text
//!                      +------------------+
//!     FlightRequest -> | feature builders | -> scaled feature row
//!                      +------------------+
//!                               |
//!                     cancellation model (2 classes)
//!                               |
//!                     probability correction + threshold
//!                          /              \
//!                    cancelled        not cancelled
//!                        |                  |
//!               cause model (5)      delay model (4)
//! ```
//!
//! The correction layer is the part that makes the raw model usable: the
//! cancellation classifier was trained on heavily imbalanced data and
//! over-predicts cancellations, so its positive probability is scaled down
//! for flight profiles that historically almost never cancel before the
//! final threshold is applied.

pub mod context;
pub mod correction;
pub mod orchestrator;

pub use context::InferenceContext;
pub use correction::{apply_correction, CorrectionOutcome, DECISION_THRESHOLD};
pub use orchestrator::{PredictionOutcome, PredictionResult, Predictor};

use thiserror::Error;

use crate::artifacts::ArtifactError;
use crate::features::FeatureError;

/// Failure modes of the prediction pipeline.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The request fields could not be turned into model features.
    #[error("feature preparation failed: {0}")]
    FeaturePreparation(#[from] FeatureError),

    /// The model artifacts are missing or unusable.
    #[error("models unavailable: {message}")]
    ModelUnavailable { message: String },
}

impl PredictionError {
    pub fn model_unavailable(message: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            message: message.into(),
        }
    }
}

impl From<ArtifactError> for PredictionError {
    fn from(err: ArtifactError) -> Self {
        Self::ModelUnavailable {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_error_converts() {
        let err = PredictionError::from(FeatureError::InvalidDate {
            value: "soon".to_string(),
        });
        assert!(matches!(err, PredictionError::FeaturePreparation(_)));
        assert!(err.to_string().contains("soon"));
    }

    #[test]
    fn test_artifact_error_converts_to_unavailable() {
        let err = PredictionError::from(ArtifactError::validation(
            "model_delay.json",
            "expected 4 classes",
        ));
        assert!(matches!(err, PredictionError::ModelUnavailable { .. }));
        assert!(err.to_string().contains("model_delay.json"));
    }
}
