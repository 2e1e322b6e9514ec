//! The loaded artifact bundle.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::artifacts::store::{
    IMPUTER, IMPUTER_DELAY, LABEL_ENC_AIRLINE, LABEL_ENC_ORIGIN, MODEL_CANCELLED,
    MODEL_CANCEL_CODE, MODEL_CONFIG, MODEL_DELAY, SCALER, SCALER_DELAY,
};
use crate::artifacts::{
    ArtifactError, ArtifactResult, Classifier, FsArtifactStore, GbtClassifier, Imputer,
    LabelEncoder, ModelConfig, Scaler, TransformPair,
};
use crate::features::schema;

/// Cancellation, cause and delay class counts fixed by training.
const CANCEL_CLASSES: usize = 2;
const CAUSE_CLASSES: usize = 5;
const DELAY_CLASSES: usize = 4;

/// Everything the predictor needs, loaded once and shared immutably.
///
/// Loading is all-or-nothing: a missing, malformed or inconsistent artifact
/// fails the whole load, so a context that exists is a context that works.
pub struct InferenceContext {
    pub cancel_model: Arc<dyn Classifier>,
    pub cause_model: Arc<dyn Classifier>,
    pub delay_model: Arc<dyn Classifier>,
    pub cancel_transform: TransformPair,
    pub delay_transform: TransformPair,
    pub airline_encoder: LabelEncoder,
    pub city_encoder: LabelEncoder,
    pub model_config: ModelConfig,
}

// Manual impl: the classifier fields are trait objects without a `Debug`
// bound, so they are omitted from the output.
impl fmt::Debug for InferenceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceContext")
            .field("cancel_transform", &self.cancel_transform)
            .field("delay_transform", &self.delay_transform)
            .field("airline_encoder", &self.airline_encoder)
            .field("city_encoder", &self.city_encoder)
            .field("model_config", &self.model_config)
            .finish_non_exhaustive()
    }
}

impl InferenceContext {
    /// Assemble a context from already-validated parts.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        cancel_model: Arc<dyn Classifier>,
        cause_model: Arc<dyn Classifier>,
        delay_model: Arc<dyn Classifier>,
        cancel_transform: TransformPair,
        delay_transform: TransformPair,
        airline_encoder: LabelEncoder,
        city_encoder: LabelEncoder,
        model_config: ModelConfig,
    ) -> Self {
        Self {
            cancel_model,
            cause_model,
            delay_model,
            cancel_transform,
            delay_transform,
            airline_encoder,
            city_encoder,
            model_config,
        }
    }

    /// Load and validate the full bundle from a store.
    pub fn load(store: &FsArtifactStore) -> ArtifactResult<Self> {
        let cancel_model: GbtClassifier = store.read_json(MODEL_CANCELLED)?;
        cancel_model.validate(MODEL_CANCELLED)?;
        expect_classes(&cancel_model, CANCEL_CLASSES, MODEL_CANCELLED)?;
        expect_features(&cancel_model, schema::CANCEL_FEATURES.len(), MODEL_CANCELLED)?;

        let cause_model: GbtClassifier = store.read_json(MODEL_CANCEL_CODE)?;
        cause_model.validate(MODEL_CANCEL_CODE)?;
        expect_classes(&cause_model, CAUSE_CLASSES, MODEL_CANCEL_CODE)?;
        expect_features(&cause_model, schema::CANCEL_FEATURES.len(), MODEL_CANCEL_CODE)?;

        let delay_model: GbtClassifier = store.read_json(MODEL_DELAY)?;
        delay_model.validate(MODEL_DELAY)?;
        expect_classes(&delay_model, DELAY_CLASSES, MODEL_DELAY)?;
        expect_features(&delay_model, schema::DELAY_MODEL_WIDTH, MODEL_DELAY)?;

        let imputer: Imputer = store.read_json(IMPUTER)?;
        let scaler: Scaler = store.read_json(SCALER)?;
        let cancel_transform =
            build_transform(imputer, scaler, schema::CANCEL_FEATURES.len(), SCALER)?;

        let imputer_delay: Imputer = store.read_json(IMPUTER_DELAY)?;
        let scaler_delay: Scaler = store.read_json(SCALER_DELAY)?;
        let delay_transform = build_transform(
            imputer_delay,
            scaler_delay,
            schema::DELAY_FEATURES.len(),
            SCALER_DELAY,
        )?;

        let airline_encoder: LabelEncoder = store.read_json(LABEL_ENC_AIRLINE)?;
        expect_vocabulary(&airline_encoder, LABEL_ENC_AIRLINE)?;
        let city_encoder: LabelEncoder = store.read_json(LABEL_ENC_ORIGIN)?;
        expect_vocabulary(&city_encoder, LABEL_ENC_ORIGIN)?;

        let model_config: ModelConfig = store.read_json(MODEL_CONFIG)?;
        expect_schema_match(&model_config)?;

        info!(
            airlines = airline_encoder.len(),
            cities = city_encoder.len(),
            cancel_trees = cancel_model.n_trees(),
            cause_trees = cause_model.n_trees(),
            delay_trees = delay_model.n_trees(),
            training_threshold = model_config.best_threshold,
            "inference context loaded"
        );

        Ok(Self::from_parts(
            Arc::new(cancel_model),
            Arc::new(cause_model),
            Arc::new(delay_model),
            cancel_transform,
            delay_transform,
            airline_encoder,
            city_encoder,
            model_config,
        ))
    }
}

fn expect_classes(model: &GbtClassifier, expected: usize, artifact: &str) -> ArtifactResult<()> {
    if model.n_classes() != expected {
        return Err(ArtifactError::validation(
            artifact,
            format!("expected {} classes, found {}", expected, model.n_classes()),
        ));
    }
    Ok(())
}

fn expect_features(model: &GbtClassifier, expected: usize, artifact: &str) -> ArtifactResult<()> {
    if model.n_features() != expected {
        return Err(ArtifactError::validation(
            artifact,
            format!("expected {} features, found {}", expected, model.n_features()),
        ));
    }
    Ok(())
}

fn expect_vocabulary(encoder: &LabelEncoder, artifact: &str) -> ArtifactResult<()> {
    if encoder.is_empty() {
        return Err(ArtifactError::validation(artifact, "empty vocabulary"));
    }
    Ok(())
}

fn build_transform(
    imputer: Imputer,
    scaler: Scaler,
    width: usize,
    artifact: &str,
) -> ArtifactResult<TransformPair> {
    if !scaler.is_consistent() {
        return Err(ArtifactError::validation(
            artifact,
            "mean/scale length mismatch",
        ));
    }
    if imputer.width() != width || scaler.width() != width {
        return Err(ArtifactError::validation(
            artifact,
            format!(
                "transform widths {}/{} do not match schema width {}",
                imputer.width(),
                scaler.width(),
                width
            ),
        ));
    }
    Ok(TransformPair::new(imputer, scaler))
}

fn expect_schema_match(config: &ModelConfig) -> ArtifactResult<()> {
    let matches = config.features.len() == schema::CANCEL_FEATURES.len()
        && config
            .features
            .iter()
            .zip(schema::CANCEL_FEATURES.iter())
            .all(|(have, want)| have.as_str() == *want);
    if !matches {
        return Err(ArtifactError::validation(
            MODEL_CONFIG,
            "feature list does not match the cancellation schema",
        ));
    }
    Ok(())
}
