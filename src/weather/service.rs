//! Weather enrichment over injected geocoding and observation capabilities.
//!
//! Both capabilities are trait objects so the live HTTP clients stay behind
//! their feature gate and tests can stub the lot. Every failure mode here
//! degrades to a sentinel value; nothing in this module fails a prediction.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use crate::features::resolve_city;
use crate::models::WeatherSnapshot;

use super::cache::{Coordinates, GeocodeCache};

/// Geocoding service failure.
#[derive(Debug, Error)]
#[error("geocoding failed: {message}")]
pub struct GeocodeError {
    message: String,
}

impl GeocodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Observation service failure.
#[derive(Debug, Error)]
#[error("weather lookup failed: {message}")]
pub struct WeatherError {
    message: String,
}

impl WeatherError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Resolves place names to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` means the service answered but found no match.
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodeError>;
}

/// Serves daily weather aggregates for a position.
#[async_trait]
pub trait DailyWeatherProvider: Send + Sync {
    /// `Ok(None)` means no observation exists for that date.
    async fn daily(
        &self,
        coords: Coordinates,
        date: NaiveDate,
    ) -> Result<Option<WeatherSnapshot>, WeatherError>;
}

/// Fetches real observations for a city and date.
///
/// The default prediction flow never reaches this type (it substitutes
/// seasonal profiles); it backs the opt-in live enrichment mode.
pub struct WeatherEnrichment {
    geocoder: Arc<dyn Geocoder>,
    provider: Arc<dyn DailyWeatherProvider>,
    cache: GeocodeCache,
}

impl WeatherEnrichment {
    pub fn new(geocoder: Arc<dyn Geocoder>, provider: Arc<dyn DailyWeatherProvider>) -> Self {
        Self {
            geocoder,
            provider,
            cache: GeocodeCache::new(),
        }
    }

    /// Coordinates for a city name, alias-resolved and cached.
    ///
    /// Geocoding failures and empty answers yield the origin sentinel and
    /// stay out of the cache, so the next request retries the service.
    pub async fn coordinates_for(&self, city: &str) -> Coordinates {
        let place = resolve_city(city);
        if let Some(hit) = self.cache.get(&place) {
            return hit;
        }
        match self.geocoder.geocode(&place).await {
            Ok(Some(coords)) => {
                self.cache.insert(place, coords);
                coords
            }
            Ok(None) => {
                debug!(%place, "geocoder found no match");
                Coordinates::origin_sentinel()
            }
            Err(err) => {
                warn!(%place, error = %err, "geocoding failed");
                Coordinates::origin_sentinel()
            }
        }
    }

    /// Daily observation for a city and date.
    ///
    /// A failed or empty lookup collapses to the no-data sentinel; gaps in
    /// an otherwise valid observation become zeros.
    pub async fn snapshot_for(&self, city: &str, date: NaiveDate) -> WeatherSnapshot {
        let coords = self.coordinates_for(city).await;
        match self.provider.daily(coords, date).await {
            Ok(Some(snapshot)) => snapshot.with_gaps_zeroed(),
            Ok(None) => {
                debug!(%city, %date, "no observation for date");
                WeatherSnapshot::no_data_sentinel()
            }
            Err(err) => {
                warn!(%city, %date, error = %err, "weather lookup failed");
                WeatherSnapshot::no_data_sentinel()
            }
        }
    }

    /// The underlying cache, exposed for pre-seeding in tests.
    pub fn cache(&self) -> &GeocodeCache {
        &self.cache
    }
}
