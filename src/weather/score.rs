//! Composite weather severity score.

use crate::models::WeatherSnapshot;

/// Collapse a daily observation into a single 0-10 severity value.
///
/// The breakpoints and caps are frozen alongside the trained models:
/// precipitation contributes up to 3 points (`prcp / 10`), snowfall up to 4
/// (`snow / 5`), wind above 10 up to 2 (`(wspd - 10) / 10`), a temperature
/// extreme (`tmax > 35` or `tmin < -10`) adds 1, and pressure outside
/// 1000..=1025 hPa adds 0.5.
pub fn composite_score(snapshot: &WeatherSnapshot) -> f64 {
    let mut score = 0.0;

    if snapshot.prcp > 0.0 {
        score += (snapshot.prcp / 10.0).min(3.0);
    }
    if snapshot.snow > 0.0 {
        score += (snapshot.snow / 5.0).min(4.0);
    }
    if snapshot.wspd > 10.0 {
        score += ((snapshot.wspd - 10.0) / 10.0).min(2.0);
    }
    if snapshot.tmax > 35.0 || snapshot.tmin < -10.0 {
        score += 1.0;
    }
    if snapshot.pres < 1000.0 || snapshot.pres > 1025.0 {
        score += 0.5;
    }

    score.min(10.0)
}

#[cfg(test)]
mod tests {
    use super::composite_score;
    use crate::models::WeatherSnapshot;

    #[test]
    fn test_calm_defaults_score_zero() {
        assert_eq!(composite_score(&WeatherSnapshot::summer_default()), 0.0);
        assert_eq!(composite_score(&WeatherSnapshot::off_season_default()), 0.0);
        assert_eq!(composite_score(&WeatherSnapshot::no_data_sentinel()), 0.0);
    }

    #[test]
    fn test_precipitation_contribution_caps_at_three() {
        let mut snap = WeatherSnapshot::summer_default();
        snap.prcp = 15.0;
        assert_eq!(composite_score(&snap), 1.5);
        snap.prcp = 300.0;
        assert_eq!(composite_score(&snap), 3.0);
    }

    #[test]
    fn test_snow_contribution_caps_at_four() {
        let mut snap = WeatherSnapshot::off_season_default();
        snap.snow = 10.0;
        assert_eq!(composite_score(&snap), 2.0);
        snap.snow = 100.0;
        assert_eq!(composite_score(&snap), 4.0);
    }

    #[test]
    fn test_wind_contribution_starts_above_ten() {
        let mut snap = WeatherSnapshot::summer_default();
        snap.wspd = 10.0;
        assert_eq!(composite_score(&snap), 0.0);
        snap.wspd = 25.0;
        assert_eq!(composite_score(&snap), 1.5);
        snap.wspd = 50.0;
        assert_eq!(composite_score(&snap), 2.0);
    }

    #[test]
    fn test_temperature_extremes_add_one() {
        let mut hot = WeatherSnapshot::summer_default();
        hot.tmax = 36.0;
        assert_eq!(composite_score(&hot), 1.0);

        let mut cold = WeatherSnapshot::off_season_default();
        cold.tmin = -11.0;
        assert_eq!(composite_score(&cold), 1.0);
    }

    #[test]
    fn test_pressure_band_edges_are_exclusive() {
        let mut snap = WeatherSnapshot::summer_default();
        snap.pres = 1000.0;
        assert_eq!(composite_score(&snap), 0.0);
        snap.pres = 1025.0;
        assert_eq!(composite_score(&snap), 0.0);
        snap.pres = 999.9;
        assert_eq!(composite_score(&snap), 0.5);
        snap.pres = 1025.1;
        assert_eq!(composite_score(&snap), 0.5);
    }

    #[test]
    fn test_total_clamped_to_ten() {
        let snap = WeatherSnapshot {
            tmin: -20.0,
            tmax: 40.0,
            prcp: 500.0,
            snow: 500.0,
            wdir: 0.0,
            wspd: 80.0,
            wpgt: 120.0,
            pres: 950.0,
            tsun: 0.0,
        };
        // 3 + 4 + 2 + 1 + 0.5 exceeds the cap.
        assert_eq!(composite_score(&snap), 10.0);
    }
}
