//! Shared test fixtures: a synthetic artifact directory whose models are
//! small enough to compute expected probabilities by hand.
//!
//! The transforms are identity (zero mean, unit scale), so the models see
//! raw feature values. The cancellation model is a single stump on the
//! MONTH column; the cause and delay models are single-leaf trees whose
//! softmax is fixed regardless of input.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use flightcast::artifacts::store::{
    IMPUTER, IMPUTER_DELAY, LABEL_ENC_AIRLINE, LABEL_ENC_ORIGIN, MODEL_CANCELLED,
    MODEL_CANCEL_CODE, MODEL_CONFIG, MODEL_DELAY, SCALER, SCALER_DELAY,
};
use flightcast::artifacts::{compute_checksum, Manifest};
use flightcast::features::schema::{CANCEL_FEATURES, DELAY_FEATURES, DELAY_MODEL_WIDTH};

/// Column the synthetic cancellation stump splits on (MONTH).
pub const MONTH_COLUMN: usize = 1;

/// Cancellation margin for months up to June: sigmoid(2) is about 0.88.
pub const EARLY_MONTH_MARGIN: f64 = 2.0;
/// Cancellation margin for July onward: sigmoid(-2) is about 0.12.
pub const LATE_MONTH_MARGIN: f64 = -2.0;

/// Cause-model margins, one per class; class 1 ("B - Weather") wins.
pub const CAUSE_MARGINS: [f64; 5] = [0.0, 2.0, 0.5, -1.0, -3.0];
/// Delay-model margins, one per class; class 0 ("On time or early") wins.
pub const DELAY_MARGINS: [f64; 4] = [2.0, 0.0, -1.0, -2.0];

/// Encoder vocabularies the fixture ships.
pub const AIRLINES: [&str; 4] = ["AA", "DL", "UA", "WN"];
pub const CITIES: [&str; 4] = ["Chicago", "Denver", "New York", "Seattle"];

/// Every artifact `write_artifacts` produces, in manifest order.
pub const ARTIFACT_NAMES: [&str; 10] = [
    MODEL_CANCELLED,
    MODEL_CANCEL_CODE,
    MODEL_DELAY,
    IMPUTER,
    SCALER,
    IMPUTER_DELAY,
    SCALER_DELAY,
    LABEL_ENC_AIRLINE,
    LABEL_ENC_ORIGIN,
    MODEL_CONFIG,
];

/// Mirror of the ensemble link functions, for expected values in tests.
pub fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}

/// Same algorithm as the ensemble softmax (max-shifted, in index order),
/// so expected values match to the last bit.
pub fn softmax(margins: &[f64]) -> Vec<f64> {
    let max = margins.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut out: Vec<f64> = margins.iter().map(|m| (m - max).exp()).collect();
    let sum: f64 = out.iter().sum();
    for p in &mut out {
        *p /= sum;
    }
    out
}

fn leaf_trees(margins: &[f64]) -> Vec<Value> {
    margins
        .iter()
        .map(|leaf| json!({ "nodes": [{ "leaf": leaf }] }))
        .collect()
}

fn cancel_model() -> Value {
    json!({
        "objective": "binary:logistic",
        "n_classes": 2,
        "n_features": CANCEL_FEATURES.len(),
        "trees": [{
            "nodes": [
                {
                    "feature": MONTH_COLUMN,
                    "threshold": 6.5,
                    "left": 1,
                    "right": 2
                },
                { "leaf": EARLY_MONTH_MARGIN },
                { "leaf": LATE_MONTH_MARGIN }
            ]
        }]
    })
}

fn cause_model() -> Value {
    json!({
        "objective": "multi:softprob",
        "n_classes": 5,
        "n_features": CANCEL_FEATURES.len(),
        "trees": leaf_trees(&CAUSE_MARGINS)
    })
}

fn delay_model() -> Value {
    json!({
        "objective": "multi:softprob",
        "n_classes": 4,
        "n_features": DELAY_MODEL_WIDTH,
        "trees": leaf_trees(&DELAY_MARGINS)
    })
}

fn identity_imputer(width: usize) -> Value {
    json!({ "statistics": vec![0.0; width] })
}

fn identity_scaler(width: usize) -> Value {
    json!({ "mean": vec![0.0; width], "scale": vec![1.0; width] })
}

fn encoder(classes: &[&str]) -> Value {
    json!({ "classes": classes })
}

fn model_config() -> Value {
    json!({
        "features": CANCEL_FEATURES,
        "best_threshold": 0.617,
        "min_year": 2015,
        "max_year": 2024
    })
}

pub fn write_json(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// Write a complete, loadable artifact directory.
pub fn write_artifacts(dir: &Path) {
    write_json(dir, MODEL_CANCELLED, &cancel_model());
    write_json(dir, MODEL_CANCEL_CODE, &cause_model());
    write_json(dir, MODEL_DELAY, &delay_model());
    write_json(dir, IMPUTER, &identity_imputer(CANCEL_FEATURES.len()));
    write_json(dir, SCALER, &identity_scaler(CANCEL_FEATURES.len()));
    write_json(dir, IMPUTER_DELAY, &identity_imputer(DELAY_FEATURES.len()));
    write_json(dir, SCALER_DELAY, &identity_scaler(DELAY_FEATURES.len()));
    write_json(dir, LABEL_ENC_AIRLINE, &encoder(&AIRLINES));
    write_json(dir, LABEL_ENC_ORIGIN, &encoder(&CITIES));
    write_json(dir, MODEL_CONFIG, &model_config());
}

/// Write `manifest.json` with the current checksums of every artifact.
pub fn write_manifest(dir: &Path) {
    let mut artifacts = serde_json::Map::new();
    for name in ARTIFACT_NAMES {
        let bytes = fs::read(dir.join(name)).unwrap();
        artifacts.insert(name.to_string(), Value::String(compute_checksum(&bytes)));
    }
    let manifest = json!({ "artifacts": artifacts });
    // Round-trip through the real type so the fixture stays in sync with
    // the manifest format.
    let parsed: Manifest = serde_json::from_value(manifest.clone()).unwrap();
    assert_eq!(parsed.len(), ARTIFACT_NAMES.len());
    fs::write(
        dir.join("manifest.json"),
        serde_json::to_vec_pretty(&manifest).unwrap(),
    )
    .unwrap();
}
