//! Post-hoc correction of the raw cancellation probability.
//!
//! Four multiplicative rules scale the positive-class probability down for
//! flight profiles that historically almost never cancel. The rules read
//! the raw request values, not the encoded features: the reliable-carrier
//! check in particular matches the literal airline string and deliberately
//! ignores alias resolution.

use chrono::Datelike;

use crate::features::{calendar, FeatureError};
use crate::models::FlightRequest;

/// Decision threshold applied to the corrected cancellation probability.
///
/// Tuned together with the rule factors below; a corrected probability must
/// strictly exceed this for the flight to be called cancelled.
pub const DECISION_THRESHOLD: f64 = 0.45;

/// Floor and ceiling for a corrected cancellation probability.
const MIN_CANCEL_PROBABILITY: f64 = 0.02;
const MAX_CANCEL_PROBABILITY: f64 = 0.95;

const SUMMER_FACTOR: f64 = 0.3;
const DAYTIME_FACTOR: f64 = 0.5;
const SHORT_DISTANCE_FACTOR: f64 = 0.6;
const RELIABLE_AIRLINE_FACTOR: f64 = 0.7;

/// Carriers with a strong historical completion record. Matched against the
/// raw request value, case-sensitively.
const RELIABLE_AIRLINES: [&str; 3] = ["AA", "DL", "UA"];

/// Corrected probability pair plus the audit trail of applied rules.
#[derive(Debug, Clone)]
pub struct CorrectionOutcome {
    /// `[not_cancelled, cancelled]` after correction.
    pub probabilities: [f64; 2],
    /// Product of every fired rule factor; 1.0 when nothing fired.
    pub factor: f64,
    /// Names of the fired rules, in rule order.
    pub reasons: Vec<&'static str>,
}

impl CorrectionOutcome {
    /// Threshold decision on the corrected pair.
    pub fn cancelled(&self) -> bool {
        self.probabilities[1] > DECISION_THRESHOLD
    }

    /// Probability of the winning side.
    pub fn confidence(&self) -> f64 {
        self.probabilities[0].max(self.probabilities[1])
    }
}

/// Apply the correction rules to a raw `[not_cancelled, cancelled]` pair.
///
/// When at least one rule fires, the cancelled probability is multiplied by
/// the combined factor, clamped to `[0.02, 0.95]`, and the pair is rebuilt
/// from its complement. When no rule fires the raw pair passes through
/// untouched.
pub fn apply_correction(
    request: &FlightRequest,
    raw: [f64; 2],
) -> Result<CorrectionOutcome, FeatureError> {
    let date = calendar::parse_flight_date(&request.date)?;
    let dep_time = calendar::parse_hhmm("departure_time", &request.departure_time)?;

    let mut factor = 1.0;
    let mut reasons = Vec::new();

    if calendar::is_summer_month(date.month()) {
        factor *= SUMMER_FACTOR;
        reasons.push("Summer month");
    }
    if (800..=1800).contains(&dep_time) {
        factor *= DAYTIME_FACTOR;
        reasons.push("Daytime flight");
    }
    if request.distance < 1000.0 {
        factor *= SHORT_DISTANCE_FACTOR;
        reasons.push("Short distance");
    }
    if RELIABLE_AIRLINES.contains(&request.airline.as_str()) {
        factor *= RELIABLE_AIRLINE_FACTOR;
        reasons.push("Reliable airline");
    }

    let probabilities = if factor < 1.0 {
        let adjusted = (raw[1] * factor).clamp(MIN_CANCEL_PROBABILITY, MAX_CANCEL_PROBABILITY);
        [1.0 - adjusted, adjusted]
    } else {
        raw
    };

    Ok(CorrectionOutcome {
        probabilities,
        factor,
        reasons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    fn request(date: &str, dep: &str, distance: f64, airline: &str) -> FlightRequest {
        FlightRequest {
            date: date.to_string(),
            airline: airline.to_string(),
            origin: "New York, NY".to_string(),
            destination: "Miami, FL".to_string(),
            departure_time: dep.to_string(),
            arrival_time: "23:00".to_string(),
            distance,
        }
    }

    #[test]
    fn test_no_rules_passes_raw_pair_through() {
        let req = request("2024-01-15", "19:00", 1800.0, "LH");
        let outcome = apply_correction(&req, [0.3, 0.7]).unwrap();
        assert_eq!(outcome.factor, 1.0);
        assert!(outcome.reasons.is_empty());
        assert_eq!(outcome.probabilities, [0.3, 0.7]);
        assert!(outcome.cancelled());
    }

    #[test]
    fn test_all_four_rules_compound() {
        let req = request("2024-07-15", "10:00", 500.0, "AA");
        let outcome = apply_correction(&req, [0.2, 0.8]).unwrap();

        assert!(close(outcome.factor, 0.3 * 0.5 * 0.6 * 0.7));
        assert_eq!(
            outcome.reasons,
            vec![
                "Summer month",
                "Daytime flight",
                "Short distance",
                "Reliable airline"
            ]
        );
        assert!(close(outcome.probabilities[1], 0.8 * 0.063));
        assert!(close(outcome.probabilities[0], 1.0 - 0.8 * 0.063));
        assert!(!outcome.cancelled());
        assert!(close(outcome.confidence(), 1.0 - 0.0504));
    }

    #[test]
    fn test_floor_clamp() {
        let req = request("2024-07-15", "10:00", 500.0, "AA");
        let outcome = apply_correction(&req, [0.999, 0.001]).unwrap();
        assert_eq!(outcome.probabilities[1], 0.02);
        assert!(close(outcome.probabilities[0], 0.98));
    }

    #[test]
    fn test_single_rule_still_cancels_when_probability_high() {
        let req = request("2024-01-15", "19:00", 1800.0, "DL");
        let outcome = apply_correction(&req, [0.1, 0.9]).unwrap();
        assert!(close(outcome.factor, 0.7));
        assert_eq!(outcome.reasons, vec!["Reliable airline"]);
        assert!(close(outcome.probabilities[1], 0.63));
        assert!(outcome.cancelled());
    }

    #[test]
    fn test_threshold_is_strict() {
        let req = request("2024-01-15", "19:00", 1800.0, "LH");
        let at = apply_correction(&req, [0.55, 0.45]).unwrap();
        assert!(!at.cancelled());
        let above = apply_correction(&req, [0.549, 0.451]).unwrap();
        assert!(above.cancelled());
    }

    #[test]
    fn test_daytime_band_is_inclusive() {
        let morning = request("2024-01-15", "08:00", 1800.0, "LH");
        assert_eq!(apply_correction(&morning, [0.5, 0.5]).unwrap().reasons, vec!["Daytime flight"]);

        let evening = request("2024-01-15", "18:00", 1800.0, "LH");
        assert_eq!(apply_correction(&evening, [0.5, 0.5]).unwrap().reasons, vec!["Daytime flight"]);

        let before = request("2024-01-15", "07:59", 1800.0, "LH");
        assert!(apply_correction(&before, [0.5, 0.5]).unwrap().reasons.is_empty());

        let after = request("2024-01-15", "18:01", 1800.0, "LH");
        assert!(apply_correction(&after, [0.5, 0.5]).unwrap().reasons.is_empty());
    }

    #[test]
    fn test_distance_boundary() {
        let short = request("2024-01-15", "19:00", 999.9, "LH");
        assert_eq!(
            apply_correction(&short, [0.5, 0.5]).unwrap().reasons,
            vec!["Short distance"]
        );

        let exact = request("2024-01-15", "19:00", 1000.0, "LH");
        assert!(apply_correction(&exact, [0.5, 0.5]).unwrap().reasons.is_empty());
    }

    #[test]
    fn test_reliable_airline_match_is_raw_and_case_sensitive() {
        let lowercase = request("2024-01-15", "19:00", 1800.0, "aa");
        assert!(apply_correction(&lowercase, [0.5, 0.5]).unwrap().reasons.is_empty());

        // Alias resolution applies to encoding only, not to this rule.
        let alias = request("2024-01-15", "19:00", 1800.0, "THY");
        assert!(apply_correction(&alias, [0.5, 0.5]).unwrap().reasons.is_empty());

        let exact = request("2024-01-15", "19:00", 1800.0, "UA");
        assert_eq!(
            apply_correction(&exact, [0.5, 0.5]).unwrap().reasons,
            vec!["Reliable airline"]
        );
    }

    #[test]
    fn test_invalid_date_is_a_preparation_error() {
        let req = request("15.07.2024", "10:00", 500.0, "AA");
        let err = apply_correction(&req, [0.5, 0.5]).unwrap_err();
        assert!(matches!(err, FeatureError::InvalidDate { .. }));
    }

    #[test]
    fn test_missing_defaults_fire_short_distance_only() {
        // Serde defaults: distance 0, departure "00:00", airline "Unknown".
        let req = request("2024-10-01", "00:00", 0.0, "Unknown");
        let outcome = apply_correction(&req, [0.6, 0.4]).unwrap();
        assert_eq!(outcome.reasons, vec!["Short distance"]);
        assert!(close(outcome.factor, 0.6));
        assert!(close(outcome.probabilities[1], 0.24));
    }
}
