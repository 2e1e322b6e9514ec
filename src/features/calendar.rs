//! Temporal derivations shared by both feature builders.

use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

use super::FeatureError;

/// First year present in the training data. Frozen at training time.
pub const YEAR_ANCHOR_MIN: i32 = 2015;
/// Last year present in the training data. Frozen at training time.
pub const YEAR_ANCHOR_MAX: i32 = 2024;

/// Calendar-derived features for a flight date.
///
/// `year_normalized` interpolates linearly between the frozen training-year
/// anchors and is intentionally unclamped: dates outside the training range
/// extrapolate, exactly as they would have through the training transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarFeatures {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Weekday with Monday = 0.
    pub day_of_week: u32,
    /// Season index: Dec-Feb 0, Mar-May 1, Jun-Aug 2, Sep-Nov 3.
    pub season: u32,
    pub year_normalized: f64,
    pub month_sin: f64,
    pub month_cos: f64,
    pub day_sin: f64,
    pub day_cos: f64,
}

impl CalendarFeatures {
    /// Derive all calendar features from a date.
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year();
        let month = date.month();
        let day = date.day();
        Self {
            year,
            month,
            day,
            day_of_week: date.weekday().num_days_from_monday(),
            season: season_for_month(month),
            year_normalized: (year - YEAR_ANCHOR_MIN) as f64
                / (YEAR_ANCHOR_MAX - YEAR_ANCHOR_MIN) as f64,
            month_sin: (2.0 * PI * month as f64 / 12.0).sin(),
            month_cos: (2.0 * PI * month as f64 / 12.0).cos(),
            // Day cycles use a 31-day period regardless of month length,
            // matching the training transform.
            day_sin: (2.0 * PI * day as f64 / 31.0).sin(),
            day_cos: (2.0 * PI * day as f64 / 31.0).cos(),
        }
    }
}

/// Parse a flight date in `YYYY-MM-DD` form.
pub fn parse_flight_date(value: &str) -> Result<NaiveDate, FeatureError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| FeatureError::InvalidDate {
        value: value.to_string(),
    })
}

/// Reduce an `HH:MM` string to the integer `HHMM` encoding.
///
/// The colon is removed and the remainder parsed as a plain integer, so
/// `"09:30"` becomes 930 and `"00:00"` becomes 0. Anything that does not
/// survive that reduction is a preparation error.
pub fn parse_hhmm(field: &'static str, value: &str) -> Result<i64, FeatureError> {
    value
        .replace(':', "")
        .trim()
        .parse::<i64>()
        .map_err(|_| FeatureError::InvalidTime {
            field,
            value: value.to_string(),
        })
}

/// Season index for a calendar month (1-12).
pub fn season_for_month(month: u32) -> u32 {
    match month {
        12 | 1 | 2 => 0,
        3..=5 => 1,
        6..=8 => 2,
        _ => 3,
    }
}

/// True for the months whose seasonal weather profile is the summer one.
pub fn is_summer_month(month: u32) -> bool {
    (6..=8).contains(&month)
}
