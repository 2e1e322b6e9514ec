//! Categorical label encoders exported from the training pipeline.

use serde::Deserialize;
use std::collections::HashMap;

/// An ordered categorical vocabulary mapping strings to integer codes.
///
/// The on-disk form is just the ordered class list (`{"classes": [...]}`),
/// mirroring how the training pipeline persisted its encoders; the code of
/// a class is its position in that list.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "EncoderRepr")]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: HashMap<String, i64>,
}

#[derive(Deserialize)]
struct EncoderRepr {
    classes: Vec<String>,
}

impl From<EncoderRepr> for LabelEncoder {
    fn from(repr: EncoderRepr) -> Self {
        Self::from_classes(repr.classes)
    }
}

impl LabelEncoder {
    /// Build an encoder from an ordered class list.
    pub fn from_classes(classes: Vec<String>) -> Self {
        let index = classes
            .iter()
            .enumerate()
            .map(|(i, class)| (class.clone(), i as i64))
            .collect();
        Self { classes, index }
    }

    /// Integer code for a value, `None` if outside the vocabulary.
    pub fn transform(&self, value: &str) -> Option<i64> {
        self.index.get(value).copied()
    }

    /// The ordered vocabulary.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of classes in the vocabulary.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
