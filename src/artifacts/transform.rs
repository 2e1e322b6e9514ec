//! Preprocessing transforms exported from the training pipeline.
//!
//! Each model has a fitted imputer and scaler pair that must be applied in
//! that order, with the columns in the exact training schema order.

use serde::Deserialize;

/// Median imputer: fills missing entries with per-column training medians.
#[derive(Debug, Clone, Deserialize)]
pub struct Imputer {
    /// Per-column fill values (the training medians).
    statistics: Vec<f64>,
}

impl Imputer {
    pub fn new(statistics: Vec<f64>) -> Self {
        Self { statistics }
    }

    /// Number of columns this imputer was fit on.
    pub fn width(&self) -> usize {
        self.statistics.len()
    }

    /// Replace every non-finite entry with its column median.
    pub fn transform(&self, row: &mut [f64]) {
        debug_assert_eq!(row.len(), self.statistics.len());
        for (value, fill) in row.iter_mut().zip(&self.statistics) {
            if !value.is_finite() {
                *value = *fill;
            }
        }
    }
}

/// Standardizing scaler: centers and scales each column.
#[derive(Debug, Clone, Deserialize)]
pub struct Scaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl Scaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    /// Number of columns this scaler was fit on.
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// True when the mean and scale vectors agree in length.
    pub fn is_consistent(&self) -> bool {
        self.mean.len() == self.scale.len()
    }

    /// Standardize each column in place.
    ///
    /// A zero or non-finite scale acts as 1.0, matching how the training
    /// library neutralizes constant columns.
    pub fn transform(&self, row: &mut [f64]) {
        debug_assert_eq!(row.len(), self.mean.len());
        for (i, value) in row.iter_mut().enumerate() {
            let scale = self.scale[i];
            let scale = if scale.is_finite() && scale != 0.0 {
                scale
            } else {
                1.0
            };
            *value = (*value - self.mean[i]) / scale;
        }
    }
}

/// An imputer and scaler fitted on the same training frame, applied in
/// sequence.
#[derive(Debug, Clone)]
pub struct TransformPair {
    imputer: Imputer,
    scaler: Scaler,
}

impl TransformPair {
    /// Pair an imputer and scaler. Widths must agree; the loader validates
    /// this before construction.
    pub fn new(imputer: Imputer, scaler: Scaler) -> Self {
        debug_assert_eq!(imputer.width(), scaler.width());
        Self { imputer, scaler }
    }

    /// Column count of the fitted transforms.
    pub fn width(&self) -> usize {
        self.imputer.width()
    }

    /// Impute then scale a feature row.
    pub fn apply(&self, mut row: Vec<f64>) -> Vec<f64> {
        self.imputer.transform(&mut row);
        self.scaler.transform(&mut row);
        row
    }
}
