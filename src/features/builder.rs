//! Assemble model-ready feature rows from a flight request.
//!
//! Both builders share the calendar and encoding steps, then diverge in
//! schema: the cancellation row follows the training column order in
//! [`schema::CANCEL_FEATURES`], the delay row the name-sorted order in
//! [`schema::DELAY_FEATURES`]. Each row passes through its fitted
//! imputer/scaler pair before it reaches a model.

use crate::artifacts::{LabelEncoder, TransformPair};
use crate::models::{FlightRequest, WeatherSnapshot};
use crate::weather::composite_score;

use super::calendar::{self, CalendarFeatures};
use super::encoding::{resolve_airline, resolve_city, safe_encode};
use super::schema;
use super::FeatureError;

/// Distance bin edges in miles. Bins are left-open and right-closed, so a
/// distance of exactly 0 (or anything beyond the last edge) falls outside
/// every bin and becomes a missing value for the imputer to fill.
const DISTANCE_BIN_EDGES: [f64; 6] = [0.0, 400.0, 800.0, 1500.0, 3000.0, 6000.0];

/// Distance bucket index (0-4), or NaN when outside all bins.
pub fn distance_category(distance: f64) -> f64 {
    if distance.is_finite() {
        for (i, window) in DISTANCE_BIN_EDGES.windows(2).enumerate() {
            if distance > window[0] && distance <= window[1] {
                return i as f64;
            }
        }
    }
    f64::NAN
}

/// Departure-slot bucket from an integer `HHMM` value.
///
/// Buckets follow operational congestion bands: early morning 1, morning
/// 2, midday 3, afternoon 4, evening 5, night 6. Bucket 0 is reserved for
/// genuinely missing departure times.
pub fn departure_time_bucket(hhmm: f64) -> f64 {
    if !hhmm.is_finite() {
        return 0.0;
    }
    let hour = (hhmm / 100.0).floor() as i64;
    match hour {
        5..=7 => 1.0,
        8..=11 => 2.0,
        12..=14 => 3.0,
        15..=18 => 4.0,
        19..=21 => 5.0,
        _ => 6.0,
    }
}

struct SharedFields {
    cal: CalendarFeatures,
    airline_code: i64,
    origin_code: i64,
    dest_code: i64,
    dep_time: i64,
    arr_time: i64,
}

fn shared_fields(
    request: &FlightRequest,
    airline_encoder: &LabelEncoder,
    city_encoder: &LabelEncoder,
) -> Result<SharedFields, FeatureError> {
    let date = calendar::parse_flight_date(&request.date)?;
    Ok(SharedFields {
        cal: CalendarFeatures::from_date(date),
        airline_code: safe_encode(airline_encoder, &resolve_airline(&request.airline), 0),
        origin_code: safe_encode(city_encoder, &resolve_city(&request.origin), 0),
        dest_code: safe_encode(city_encoder, &resolve_city(&request.destination), 0),
        dep_time: calendar::parse_hhmm("departure_time", &request.departure_time)?,
        arr_time: calendar::parse_hhmm("arrival_time", &request.arrival_time)?,
    })
}

/// Build the transformed 29-column cancellation feature row.
///
/// The same row feeds both the cancellation and the cause classifier.
pub fn build_cancel_features(
    request: &FlightRequest,
    snapshot: &WeatherSnapshot,
    airline_encoder: &LabelEncoder,
    city_encoder: &LabelEncoder,
    transform: &TransformPair,
) -> Result<Vec<f64>, FeatureError> {
    let fields = shared_fields(request, airline_encoder, city_encoder)?;
    let cal = &fields.cal;
    let distance = request.distance;

    let raw = vec![
        cal.year_normalized,
        cal.month as f64,
        cal.day as f64,
        cal.day_of_week as f64,
        cal.season as f64,
        cal.month_sin,
        cal.month_cos,
        cal.day_sin,
        cal.day_cos,
        fields.airline_code as f64,
        fields.origin_code as f64,
        fields.dest_code as f64,
        fields.dep_time as f64,
        fields.arr_time as f64,
        distance,
        distance_category(distance),
        departure_time_bucket(fields.dep_time as f64),
        snapshot.tmin,
        snapshot.tmax,
        snapshot.prcp,
        snapshot.snow,
        snapshot.wdir,
        snapshot.wspd,
        snapshot.wpgt,
        snapshot.pres,
        snapshot.tsun,
        composite_score(snapshot),
        schema::ROUTE_POPULARITY_LOG,
        schema::AIRLINE_RELIABILITY,
    ];
    debug_assert_eq!(raw.len(), schema::CANCEL_FEATURES.len());

    Ok(transform.apply(raw))
}

/// Build the transformed 17-column delay feature row.
///
/// The raw row covers the full 19-column delay transform schema (including
/// the `DEP_TIME` duplicate and `CRS_ARR_TIME`, which exist only for the
/// fitted transforms); the scaled result is truncated to the width the
/// delay model consumes.
pub fn build_delay_features(
    request: &FlightRequest,
    snapshot: &WeatherSnapshot,
    airline_encoder: &LabelEncoder,
    city_encoder: &LabelEncoder,
    transform: &TransformPair,
) -> Result<Vec<f64>, FeatureError> {
    let fields = shared_fields(request, airline_encoder, city_encoder)?;
    let cal = &fields.cal;

    let raw = vec![
        fields.airline_code as f64,
        fields.arr_time as f64,
        fields.dep_time as f64,
        cal.day as f64,
        fields.dep_time as f64,
        request.distance,
        fields.dest_code as f64,
        cal.month as f64,
        fields.origin_code as f64,
        cal.year as f64,
        snapshot.prcp,
        snapshot.pres,
        snapshot.snow,
        snapshot.tmax,
        snapshot.tmin,
        snapshot.tsun,
        snapshot.wdir,
        snapshot.wpgt,
        snapshot.wspd,
    ];
    debug_assert_eq!(raw.len(), schema::DELAY_FEATURES.len());

    let mut transformed = transform.apply(raw);
    transformed.truncate(schema::DELAY_MODEL_WIDTH);
    Ok(transformed)
}
