//! Feature engineering: turning a [`FlightRequest`] into model-ready vectors.
//!
//! The trained models are frozen, so everything in this module is a fixed
//! contract: column orders, bucket edges, encoding fallbacks and the year
//! normalization anchors all have to match what the training pipeline
//! produced. Changing any of them silently shifts the meaning of a column
//! and invalidates the models.
//!
//! [`FlightRequest`]: crate::models::FlightRequest

pub mod builder;
pub mod calendar;
pub mod encoding;
pub mod schema;

pub use builder::{build_cancel_features, build_delay_features};
pub use calendar::CalendarFeatures;
pub use encoding::{resolve_city, safe_encode};

/// Failure while turning raw request fields into numeric features.
///
/// These map to client errors at the HTTP boundary: the request carried a
/// value the pipeline cannot interpret. Lookup misses are deliberately NOT
/// represented here; those degrade to fallback codes instead.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// The flight date did not parse as `YYYY-MM-DD`.
    #[error("invalid flight date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// A time-of-day field did not reduce to an integer after removing colons.
    #[error("invalid {field} '{value}': expected HH:MM")]
    InvalidTime { field: &'static str, value: String },
}
