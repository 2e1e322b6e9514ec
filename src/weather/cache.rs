//! Process-wide geocoding cache.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Fallback position when geocoding cannot place a city.
    pub fn origin_sentinel() -> Self {
        Self { lat: 0.0, lon: 0.0 }
    }
}

/// Place-name to coordinates cache.
///
/// Successful lookups are remembered for the life of the process; failed
/// lookups are never stored, so the next request retries the service. Tests
/// pre-seed entries to stay off the network.
#[derive(Debug, Default)]
pub struct GeocodeCache {
    entries: RwLock<HashMap<String, Coordinates>>,
}

impl GeocodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, place: &str) -> Option<Coordinates> {
        self.entries.read().get(place).copied()
    }

    pub fn insert(&self, place: impl Into<String>, coords: Coordinates) {
        self.entries.write().insert(place.into(), coords);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
