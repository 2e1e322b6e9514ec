//! The chained predict flow.

use std::sync::Arc;

use chrono::Datelike;
use tracing::{debug, info};

use crate::artifacts::argmax;
use crate::features::{build_cancel_features, build_delay_features, calendar};
use crate::models::labels::{CANCELLATION_CAUSE_LABELS, DELAY_CLASS_LABELS};
use crate::models::{cancellation_cause_label, delay_class_label, FlightRequest, WeatherSnapshot};

use super::context::InferenceContext;
use super::correction::{apply_correction, DECISION_THRESHOLD};
use super::PredictionError;

/// Branch-specific part of a prediction.
#[derive(Debug, Clone)]
pub enum PredictionOutcome {
    /// Predicted cancelled; carries the cause class distribution.
    Cancellation {
        cause: String,
        probabilities: Vec<(String, f64)>,
    },
    /// Predicted to operate; carries the delay class distribution.
    Delay {
        class: String,
        probabilities: Vec<(String, f64)>,
    },
}

/// Complete result of one prediction.
#[derive(Debug, Clone)]
pub struct PredictionResult {
    pub cancelled: bool,
    pub not_cancelled_probability: f64,
    pub cancelled_probability: f64,
    pub confidence: f64,
    pub corrections_applied: Vec<&'static str>,
    pub correction_factor: f64,
    pub threshold: f64,
    pub outcome: PredictionOutcome,
}

/// Runs the chained models over prepared feature rows.
#[derive(Clone)]
pub struct Predictor {
    context: Arc<InferenceContext>,
}

impl Predictor {
    pub fn new(context: Arc<InferenceContext>) -> Self {
        Self { context }
    }

    /// Predict using the seasonal weather profile for the flight month.
    pub fn predict(&self, request: &FlightRequest) -> Result<PredictionResult, PredictionError> {
        let date = calendar::parse_flight_date(&request.date)?;
        let snapshot = WeatherSnapshot::seasonal_default(date.month());
        self.predict_with_snapshot(request, &snapshot)
    }

    /// Predict using an explicit weather observation.
    ///
    /// This is the live-enrichment entry point; the shared cancellation
    /// feature row feeds both the cancellation and the cause model, while
    /// the delay model gets its own row built only when needed.
    pub fn predict_with_snapshot(
        &self,
        request: &FlightRequest,
        snapshot: &WeatherSnapshot,
    ) -> Result<PredictionResult, PredictionError> {
        let ctx = self.context.as_ref();

        let cancel_row = build_cancel_features(
            request,
            snapshot,
            &ctx.airline_encoder,
            &ctx.city_encoder,
            &ctx.cancel_transform,
        )?;
        let raw = ctx.cancel_model.predict_proba(&cancel_row);
        let raw_pair = [raw[0], raw[1]];
        debug!(raw_cancelled = raw_pair[1], "raw cancellation probability");

        let correction = apply_correction(request, raw_pair)?;
        let cancelled = correction.cancelled();
        debug!(
            cancelled,
            factor = correction.factor,
            corrected = correction.probabilities[1],
            "correction applied"
        );

        let outcome = if cancelled {
            let cause_probs = ctx.cause_model.predict_proba(&cancel_row);
            PredictionOutcome::Cancellation {
                cause: cancellation_cause_label(argmax(&cause_probs)).to_string(),
                probabilities: distribution(&CANCELLATION_CAUSE_LABELS, &cause_probs),
            }
        } else {
            let delay_row = build_delay_features(
                request,
                snapshot,
                &ctx.airline_encoder,
                &ctx.city_encoder,
                &ctx.delay_transform,
            )?;
            let delay_probs = ctx.delay_model.predict_proba(&delay_row);
            PredictionOutcome::Delay {
                class: delay_class_label(argmax(&delay_probs)).to_string(),
                probabilities: distribution(&DELAY_CLASS_LABELS, &delay_probs),
            }
        };

        info!(
            cancelled,
            confidence = correction.confidence(),
            corrections = correction.reasons.len(),
            "prediction complete"
        );

        Ok(PredictionResult {
            cancelled,
            not_cancelled_probability: correction.probabilities[0],
            cancelled_probability: correction.probabilities[1],
            confidence: correction.confidence(),
            corrections_applied: correction.reasons,
            correction_factor: correction.factor,
            threshold: DECISION_THRESHOLD,
            outcome,
        })
    }
}

/// Pair class labels with probabilities, dropping any class index that has
/// no label.
fn distribution(labels: &[&str], probabilities: &[f64]) -> Vec<(String, f64)> {
    probabilities
        .iter()
        .enumerate()
        .filter(|(i, _)| *i < labels.len())
        .map(|(i, p)| (labels[i].to_string(), *p))
        .collect()
}
