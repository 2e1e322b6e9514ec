//! Weather enrichment.
//!
//! The documented prediction flow substitutes seasonal profiles for real
//! observations and never leaves the process. This module carries the
//! composite severity score that flow shares with the opt-in live path,
//! plus the geocode cache, the enrichment service and (feature-gated) the
//! live HTTP clients behind it.

pub mod cache;
#[cfg(feature = "live-weather")]
pub mod live;
pub mod score;
pub mod service;

pub use cache::{Coordinates, GeocodeCache};
#[cfg(feature = "live-weather")]
pub use live::{NominatimGeocoder, OpenMeteoProvider};
pub use score::composite_score;
pub use service::{DailyWeatherProvider, GeocodeError, Geocoder, WeatherEnrichment, WeatherError};
