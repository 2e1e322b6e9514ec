//! Daily weather observations used for feature enrichment.

use serde::{Deserialize, Serialize};

/// One day of weather at a location.
///
/// Matches the daily aggregate schema of the meteorological archive the
/// models were trained on. Every field is always populated: lookups that
/// fail are replaced by [`WeatherSnapshot::no_data_sentinel`] and the
/// documented prediction flow uses [`WeatherSnapshot::seasonal_default`],
/// so downstream feature code never sees a gap here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Minimum temperature, degrees Celsius.
    pub tmin: f64,
    /// Maximum temperature, degrees Celsius.
    pub tmax: f64,
    /// Precipitation, millimetres.
    pub prcp: f64,
    /// Snowfall depth.
    pub snow: f64,
    /// Wind direction, degrees.
    pub wdir: f64,
    /// Average wind speed.
    pub wspd: f64,
    /// Peak wind gust.
    pub wpgt: f64,
    /// Sea-level air pressure, hPa.
    pub pres: f64,
    /// Sunshine duration, hours.
    pub tsun: f64,
}

impl WeatherSnapshot {
    /// Typical northern-hemisphere summer day.
    pub fn summer_default() -> Self {
        Self {
            tmin: 22.0,
            tmax: 30.0,
            prcp: 0.0,
            snow: 0.0,
            wdir: 180.0,
            wspd: 3.0,
            wpgt: 0.0,
            pres: 1015.0,
            tsun: 10.0,
        }
    }

    /// Typical day outside the summer months.
    pub fn off_season_default() -> Self {
        Self {
            tmin: 15.0,
            tmax: 25.0,
            prcp: 0.0,
            snow: 0.0,
            wdir: 180.0,
            wspd: 5.0,
            wpgt: 0.0,
            pres: 1015.0,
            tsun: 8.0,
        }
    }

    /// Seasonal stand-in used by the synchronous prediction path.
    ///
    /// Months 6 through 8 get the summer profile, everything else the
    /// off-season profile.
    pub fn seasonal_default(month: u32) -> Self {
        if (6..=8).contains(&month) {
            Self::summer_default()
        } else {
            Self::off_season_default()
        }
    }

    /// Sentinel returned when an observation lookup fails outright.
    ///
    /// All-zero except pressure, which sits at the standard atmosphere so
    /// the composite score does not count the gap as a pressure anomaly.
    pub fn no_data_sentinel() -> Self {
        Self {
            tmin: 0.0,
            tmax: 0.0,
            prcp: 0.0,
            snow: 0.0,
            wdir: 0.0,
            wspd: 0.0,
            wpgt: 0.0,
            pres: 1013.25,
            tsun: 0.0,
        }
    }

    /// True when every field holds a finite value.
    pub fn is_finite(&self) -> bool {
        [
            self.tmin, self.tmax, self.prcp, self.snow, self.wdir, self.wspd, self.wpgt,
            self.pres, self.tsun,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Replace every non-finite field with zero.
    ///
    /// Archive rows can carry gaps in individual columns; those gaps become
    /// plain zeros rather than discarding the whole observation.
    pub fn with_gaps_zeroed(mut self) -> Self {
        for value in [
            &mut self.tmin,
            &mut self.tmax,
            &mut self.prcp,
            &mut self.snow,
            &mut self.wdir,
            &mut self.wspd,
            &mut self.wpgt,
            &mut self.pres,
            &mut self.tsun,
        ] {
            if !value.is_finite() {
                *value = 0.0;
            }
        }
        self
    }
}
