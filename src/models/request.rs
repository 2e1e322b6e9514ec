//! Inbound flight prediction request.

use serde::{Deserialize, Serialize};

/// A flight to score, as submitted by the client.
///
/// Only `date` is mandatory; every other field falls back to a neutral
/// default so a sparse request still produces a prediction. Unknown carrier
/// or city names are tolerated downstream (they encode to a fallback
/// category), so no validation happens at deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRequest {
    /// Flight date in `YYYY-MM-DD` form.
    pub date: String,
    /// Carrier name or IATA code.
    #[serde(default = "default_unknown")]
    pub airline: String,
    /// Origin city name.
    #[serde(default = "default_unknown")]
    pub origin: String,
    /// Destination city name.
    #[serde(default = "default_unknown")]
    pub destination: String,
    /// Scheduled departure in `HH:MM` local time.
    #[serde(default = "default_midnight")]
    pub departure_time: String,
    /// Scheduled arrival in `HH:MM` local time.
    #[serde(default = "default_midnight")]
    pub arrival_time: String,
    /// Route distance in miles.
    #[serde(default)]
    pub distance: f64,
}

fn default_unknown() -> String {
    "Unknown".to_string()
}

fn default_midnight() -> String {
    "00:00".to_string()
}

impl FlightRequest {
    /// Minimal request with every optional field at its default.
    pub fn for_date(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            airline: default_unknown(),
            origin: default_unknown(),
            destination: default_unknown(),
            departure_time: default_midnight(),
            arrival_time: default_midnight(),
            distance: 0.0,
        }
    }
}
