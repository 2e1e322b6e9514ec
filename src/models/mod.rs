//! Domain value types shared across the pipeline.
//!
//! These types are deliberately small: requests arrive as loosely-typed
//! strings (the upstream booking form sends whatever the user typed) and all
//! strictness lives in the feature builders, which turn them into validated
//! numeric vectors or fail with a preparation error.

pub mod labels;
pub mod request;
pub mod weather;

pub use labels::{cancellation_cause_label, delay_class_label};
pub use request::FlightRequest;
pub use weather::WeatherSnapshot;
