//! Live lookups against public geocoding and weather-archive services.
//!
//! Only compiled with the `live-weather` feature and only wired in when the
//! enrichment mode asks for it; the default prediction flow never performs
//! network I/O.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::models::WeatherSnapshot;

use super::cache::Coordinates;
use super::service::{DailyWeatherProvider, GeocodeError, Geocoder, WeatherError};

const USER_AGENT: &str = "flight_predictor";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
const ARCHIVE_ENDPOINT: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Daily aggregates requested from the archive, in snapshot field order.
const DAILY_FIELDS: &str = "temperature_2m_min,temperature_2m_max,precipitation_sum,\
                            snowfall_sum,wind_direction_10m_dominant,wind_speed_10m_max,\
                            wind_gusts_10m_max,pressure_msl_mean,sunshine_duration";

fn http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// Place-name resolution via the public Nominatim instance.
pub struct NominatimGeocoder {
    client: Client,
}

impl NominatimGeocoder {
    pub fn new() -> Result<Self, GeocodeError> {
        let client = http_client().map_err(|e| GeocodeError::new(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let places: Vec<NominatimPlace> = self
            .client
            .get(NOMINATIM_ENDPOINT)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| GeocodeError::new(e.to_string()))?
            .error_for_status()
            .map_err(|e| GeocodeError::new(e.to_string()))?
            .json()
            .await
            .map_err(|e| GeocodeError::new(e.to_string()))?;

        let Some(hit) = places.into_iter().next() else {
            return Ok(None);
        };
        let lat = hit
            .lat
            .parse()
            .map_err(|_| GeocodeError::new(format!("unparseable latitude '{}'", hit.lat)))?;
        let lon = hit
            .lon
            .parse()
            .map_err(|_| GeocodeError::new(format!("unparseable longitude '{}'", hit.lon)))?;
        Ok(Some(Coordinates { lat, lon }))
    }
}

/// Historical daily observations from the Open-Meteo archive.
pub struct OpenMeteoProvider {
    client: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Result<Self, WeatherError> {
        let client = http_client().map_err(|e| WeatherError::new(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DailyWeatherProvider for OpenMeteoProvider {
    async fn daily(
        &self,
        coords: Coordinates,
        date: NaiveDate,
    ) -> Result<Option<WeatherSnapshot>, WeatherError> {
        let day = date.format("%Y-%m-%d").to_string();
        let response: ArchiveResponse = self
            .client
            .get(ARCHIVE_ENDPOINT)
            .query(&[
                ("latitude", coords.lat.to_string()),
                ("longitude", coords.lon.to_string()),
                ("start_date", day.clone()),
                ("end_date", day),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "UTC".to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::new(e.to_string()))?
            .error_for_status()
            .map_err(|e| WeatherError::new(e.to_string()))?
            .json()
            .await
            .map_err(|e| WeatherError::new(e.to_string()))?;

        Ok(response.daily.as_ref().and_then(snapshot_from_series))
    }
}

/// First value of a daily series. A null entry surfaces as NaN (zeroed by
/// the enrichment service); a column the archive did not return at all
/// falls back to the given default.
fn series_value(series: &[Option<f64>], missing: f64) -> f64 {
    match series.first() {
        Some(Some(value)) => *value,
        Some(None) => f64::NAN,
        None => missing,
    }
}

fn snapshot_from_series(daily: &DailySeries) -> Option<WeatherSnapshot> {
    if daily.time.is_empty() {
        return None;
    }
    let fallback = WeatherSnapshot::no_data_sentinel();
    // The archive reports sunshine in seconds; the model schema uses hours.
    let tsun_seconds = series_value(&daily.sunshine_duration, f64::NAN);
    let tsun = if tsun_seconds.is_finite() {
        tsun_seconds / 3600.0
    } else {
        tsun_seconds
    };
    Some(WeatherSnapshot {
        tmin: series_value(&daily.temperature_2m_min, fallback.tmin),
        tmax: series_value(&daily.temperature_2m_max, fallback.tmax),
        prcp: series_value(&daily.precipitation_sum, fallback.prcp),
        snow: series_value(&daily.snowfall_sum, fallback.snow),
        wdir: series_value(&daily.wind_direction_10m_dominant, fallback.wdir),
        wspd: series_value(&daily.wind_speed_10m_max, fallback.wspd),
        wpgt: series_value(&daily.wind_gusts_10m_max, fallback.wpgt),
        pres: series_value(&daily.pressure_msl_mean, fallback.pres),
        tsun,
    })
}

// --- Service response types ---

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: Option<DailySeries>,
}

#[derive(Debug, Default, Deserialize)]
struct DailySeries {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
    #[serde(default)]
    snowfall_sum: Vec<Option<f64>>,
    #[serde(default)]
    wind_direction_10m_dominant: Vec<Option<f64>>,
    #[serde(default)]
    wind_speed_10m_max: Vec<Option<f64>>,
    #[serde(default)]
    wind_gusts_10m_max: Vec<Option<f64>>,
    #[serde(default)]
    pressure_msl_mean: Vec<Option<f64>>,
    #[serde(default)]
    sunshine_duration: Vec<Option<f64>>,
}
