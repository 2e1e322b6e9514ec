//! # Flightcast
//!
//! Flight disruption prediction engine.
//!
//! This crate turns raw flight metadata (date, carrier, route, scheduled times,
//! distance) into calibrated disruption predictions: will the flight be
//! cancelled, and if so why; if not, how late will it arrive. The pipeline is
//! deterministic end to end: the same request always produces the same feature
//! vectors and the same probabilities.
//!
//! ## Pipeline
//!
//! 1. **Feature engineering** ([`features`]): calendar derivations, categorical
//!    encoding with alias resolution, distance/departure bucketing, weather
//!    composite scoring, assembled into fixed-order vectors.
//! 2. **Inference** ([`inference`]): a chained classifier pass (cancellation,
//!    then cause or delay severity) over artifacts loaded by [`artifacts`].
//! 3. **Correction** ([`inference::correction`]): domain priors applied as
//!    multiplicative factors on the raw cancellation probability, clamped and
//!    thresholded.
//!
//! Weather enrichment ([`weather`]) degrades gracefully: failed lookups fall
//! back to seasonal or sentinel values and never fail a prediction.
//!
//! ## Architecture
//!
//! - [`api`]: public request/result types
//! - [`models`]: domain value types (requests, weather snapshots, labels)
//! - [`features`]: feature schemas and vector builders
//! - [`weather`]: enrichment capabilities (geocoding, daily observations)
//! - [`artifacts`]: model store (tree ensembles, transforms, encoders)
//! - [`inference`]: orchestrator and correction layer
//! - [`http`]: axum-based REST API
//!

pub mod api;

pub mod artifacts;
pub mod config;
pub mod features;
pub mod inference;
pub mod models;
pub mod weather;

#[cfg(feature = "http-server")]
pub mod http;
