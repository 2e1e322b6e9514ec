//! Gradient-boosted tree ensembles and their evaluation.
//!
//! The training side exports each classifier as a flat list of trees whose
//! nodes live in a preorder array (children always after their parent).
//! Evaluation is a plain array walk, so scoring allocates nothing beyond
//! the output distribution.

use serde::Deserialize;

use super::classifier::Classifier;
use super::error::{ArtifactError, ArtifactResult};

/// Which child receives rows whose split feature is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDirection {
    #[default]
    Left,
    Right,
}

/// One node of a decision tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Internal split: values at or below the threshold go left.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        #[serde(default)]
        missing: MissingDirection,
    },
    /// Terminal node carrying a margin contribution.
    Leaf { leaf: f64 },
}

/// A single regression tree over margin space.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Margin contribution of this tree for one feature row.
    ///
    /// Callers must have validated the tree against the feature width; the
    /// walk indexes nodes and features directly.
    pub fn score(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { leaf } => return *leaf,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    missing,
                } => {
                    let value = features[*feature];
                    idx = if !value.is_finite() {
                        match missing {
                            MissingDirection::Left => *left,
                            MissingDirection::Right => *right,
                        }
                    } else if value <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Check node topology against the expected feature width.
    ///
    /// Children must point forward in the array, which also guarantees the
    /// scoring walk terminates.
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
                ..
            } = node
            {
                if *feature >= n_features {
                    return Err(format!(
                        "node {i} splits on feature {feature}, width is {n_features}"
                    ));
                }
                if !threshold.is_finite() {
                    return Err(format!("node {i} has a non-finite threshold"));
                }
                for child in [left, right] {
                    if *child <= i || *child >= self.nodes.len() {
                        return Err(format!("node {i} has out-of-order child {child}"));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Link function of an ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Objective {
    /// Two classes; trees sum to a single logit, probability of class 1 is
    /// its sigmoid.
    #[serde(rename = "binary:logistic")]
    BinaryLogistic,
    /// `n_classes` margins built by round-robin tree assignment, softmaxed.
    #[serde(rename = "multi:softprob")]
    MultiSoftprob,
}

/// A gradient-boosted tree classifier.
///
/// Learning rate is baked into the leaf values at export time, so
/// evaluation is a plain sum of tree outputs over the base score.
#[derive(Debug, Clone, Deserialize)]
pub struct GbtClassifier {
    objective: Objective,
    n_classes: usize,
    n_features: usize,
    /// Per-class prior margins. Empty means zero.
    #[serde(default)]
    base_scores: Vec<f64>,
    trees: Vec<DecisionTree>,
}

impl GbtClassifier {
    /// Expected feature-row width.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of boosted trees.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Validate internal consistency, naming `artifact` in any error.
    pub fn validate(&self, artifact: &str) -> ArtifactResult<()> {
        match self.objective {
            Objective::BinaryLogistic => {
                if self.n_classes != 2 {
                    return Err(ArtifactError::validation(
                        artifact,
                        format!("binary objective declares {} classes", self.n_classes),
                    ));
                }
                if self.base_scores.len() > 1 {
                    return Err(ArtifactError::validation(
                        artifact,
                        format!(
                            "binary objective carries {} base scores",
                            self.base_scores.len()
                        ),
                    ));
                }
            }
            Objective::MultiSoftprob => {
                if self.n_classes < 2 {
                    return Err(ArtifactError::validation(
                        artifact,
                        format!("softprob objective declares {} classes", self.n_classes),
                    ));
                }
                if !self.base_scores.is_empty() && self.base_scores.len() != self.n_classes {
                    return Err(ArtifactError::validation(
                        artifact,
                        format!(
                            "{} base scores for {} classes",
                            self.base_scores.len(),
                            self.n_classes
                        ),
                    ));
                }
                if self.trees.len() % self.n_classes != 0 {
                    return Err(ArtifactError::validation(
                        artifact,
                        format!(
                            "{} trees do not divide into rounds of {} classes",
                            self.trees.len(),
                            self.n_classes
                        ),
                    ));
                }
            }
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features)
                .map_err(|message| ArtifactError::validation(artifact, format!("tree {i}: {message}")))?;
        }
        Ok(())
    }

    fn binary_proba(&self, features: &[f64]) -> Vec<f64> {
        let mut margin = self.base_scores.first().copied().unwrap_or(0.0);
        for tree in &self.trees {
            margin += tree.score(features);
        }
        let p = sigmoid(margin);
        vec![1.0 - p, p]
    }

    fn softprob_proba(&self, features: &[f64]) -> Vec<f64> {
        let mut margins = vec![0.0; self.n_classes];
        for (c, margin) in margins.iter_mut().enumerate() {
            *margin = self.base_scores.get(c).copied().unwrap_or(0.0);
        }
        for (i, tree) in self.trees.iter().enumerate() {
            margins[i % self.n_classes] += tree.score(features);
        }
        softmax(&mut margins);
        margins
    }
}

impl Classifier for GbtClassifier {
    fn n_classes(&self) -> usize {
        self.n_classes
    }

    fn predict_proba(&self, features: &[f64]) -> Vec<f64> {
        match self.objective {
            Objective::BinaryLogistic => self.binary_proba(features),
            Objective::MultiSoftprob => self.softprob_proba(features),
        }
    }
}

fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}

/// Numerically stable in-place softmax.
fn softmax(margins: &mut [f64]) {
    let max = margins.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut sum = 0.0;
    for m in margins.iter_mut() {
        *m = (*m - max).exp();
        sum += *m;
    }
    for m in margins.iter_mut() {
        *m /= sum;
    }
}
