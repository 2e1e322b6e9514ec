//! Categorical encoding with alias resolution and graceful fallback.
//!
//! The models were trained on US domestic data, but the booking frontend
//! serves Turkish routes. The alias tables bridge the two vocabularies:
//! each Turkish carrier and city is mapped onto the US entity whose traffic
//! profile stood in for it during training.

use tracing::warn;

use crate::artifacts::LabelEncoder;

/// Carrier codes present in the training vocabulary.
pub const KNOWN_CARRIER_CODES: [&str; 4] = ["AA", "WN", "EV", "F9"];

/// Training-set stand-in for a Turkish carrier, if one is defined.
pub fn airline_alias(name: &str) -> Option<&'static str> {
    match name {
        "THY" => Some("AA"),
        "PEGASUS" => Some("WN"),
        "ANADOLUJET" => Some("EV"),
        "SUNEXPRESS" => Some("F9"),
        _ => None,
    }
}

/// Training-set stand-in for a Turkish city, if one is defined.
pub fn city_alias(name: &str) -> Option<&'static str> {
    match name {
        "Istanbul" => Some("New York, NY"),
        "Izmir" => Some("Los Angeles, CA"),
        "Ankara" => Some("Chicago, IL"),
        "Antalya" => Some("Miami, FL"),
        "Bodrum" => Some("Orlando, FL"),
        "Dalaman" => Some("Tampa, FL"),
        "Trabzon" => Some("Seattle, WA"),
        "Adana" => Some("Houston, TX"),
        "Gaziantep" => Some("Dallas, TX"),
        "Kayseri" => Some("Denver, CO"),
        _ => None,
    }
}

/// Resolve a raw airline value to the encoder's vocabulary.
///
/// Known carrier codes are case-normalized and used directly; everything
/// else goes through the alias table (keyed uppercase) and otherwise passes
/// through untouched.
pub fn resolve_airline(raw: &str) -> String {
    let upper = raw.to_uppercase();
    if KNOWN_CARRIER_CODES.contains(&upper.as_str()) {
        return upper;
    }
    match airline_alias(&upper) {
        Some(code) => code.to_string(),
        None => raw.to_string(),
    }
}

/// Resolve a raw city value through the alias table. Unmapped names pass
/// through untouched; city casing is preserved (the encoder vocabulary is
/// case-sensitive).
pub fn resolve_city(raw: &str) -> String {
    match city_alias(raw) {
        Some(city) => city.to_string(),
        None => raw.to_string(),
    }
}

/// Encode a categorical value, falling back to `default` when the value is
/// outside the training vocabulary.
///
/// The miss is logged but is not an error: an unseen airline or city
/// degrades the prediction to whatever category `default` represents
/// rather than failing the request.
pub fn safe_encode(encoder: &LabelEncoder, value: &str, default: i64) -> i64 {
    match encoder.transform(value) {
        Some(code) => code,
        None => {
            warn!(
                category = %value,
                fallback = default,
                "category outside training vocabulary, using fallback code"
            );
            default
        }
    }
}
