//! The classifier capability consumed by the prediction orchestrator.

/// A trained multi-class probability model.
///
/// Implementations must be cheap to call concurrently through `&self`; the
/// orchestrator shares one instance across all in-flight requests.
pub trait Classifier: Send + Sync {
    /// Number of output classes.
    fn n_classes(&self) -> usize;

    /// Full class probability distribution for one feature row.
    ///
    /// Returns `n_classes` values summing to 1.
    fn predict_proba(&self, features: &[f64]) -> Vec<f64>;

    /// Most probable class for one feature row.
    fn predict(&self, features: &[f64]) -> usize {
        argmax(&self.predict_proba(features))
    }
}

/// Index of the largest value, first occurrence winning ties.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    best
}
