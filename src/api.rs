//! Public API surface for the prediction engine.
//!
//! Consolidates the types a consumer needs to drive predictions end to end
//! without reaching into individual modules.

pub use crate::artifacts::{
    ArtifactError, Classifier, FsArtifactStore, GbtClassifier, LabelEncoder, ModelConfig,
};
pub use crate::config::{AppConfig, ConfigError, EnrichmentMode};
pub use crate::features::{build_cancel_features, build_delay_features, FeatureError};
pub use crate::inference::{
    apply_correction, CorrectionOutcome, InferenceContext, PredictionError, PredictionOutcome,
    PredictionResult, Predictor, DECISION_THRESHOLD,
};
pub use crate::models::{FlightRequest, WeatherSnapshot};
pub use crate::weather::{
    composite_score, Coordinates, DailyWeatherProvider, GeocodeCache, Geocoder,
    WeatherEnrichment,
};
