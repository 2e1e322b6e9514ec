//! Error types for artifact loading.

/// Result type for artifact operations.
pub type ArtifactResult<T> = Result<T, ArtifactError>;

/// Failure while reading, verifying or validating a persisted artifact.
///
/// Every variant names the artifact involved so a failed startup log
/// points straight at the offending file.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// The artifact file could not be read.
    #[error("failed to read artifact '{artifact}': {source}")]
    Io {
        artifact: String,
        #[source]
        source: std::io::Error,
    },

    /// The artifact file is not valid JSON for its expected shape.
    #[error("failed to parse artifact '{artifact}': {source}")]
    Parse {
        artifact: String,
        #[source]
        source: serde_json::Error,
    },

    /// The artifact bytes do not match the manifest checksum.
    #[error("checksum mismatch for artifact '{artifact}': expected {expected}, got {actual}")]
    ChecksumMismatch {
        artifact: String,
        expected: String,
        actual: String,
    },

    /// The artifact parsed but its contents are inconsistent with the
    /// pipeline's frozen contracts (wrong width, wrong class count, feature
    /// order drift).
    #[error("invalid artifact '{artifact}': {message}")]
    Validation { artifact: String, message: String },
}

impl ArtifactError {
    /// Create a validation error for a named artifact.
    pub fn validation(artifact: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            artifact: artifact.into(),
            message: message.into(),
        }
    }

    /// Name of the artifact this error refers to.
    pub fn artifact(&self) -> &str {
        match self {
            Self::Io { artifact, .. }
            | Self::Parse { artifact, .. }
            | Self::ChecksumMismatch { artifact, .. }
            | Self::Validation { artifact, .. } => artifact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_artifact() {
        let err = ArtifactError::validation("scaler.json", "width 5, expected 29");
        assert_eq!(err.artifact(), "scaler.json");
        assert!(err.to_string().contains("scaler.json"));
        assert!(err.to_string().contains("width 5"));
    }

    #[test]
    fn test_checksum_error_display() {
        let err = ArtifactError::ChecksumMismatch {
            artifact: "model_delay.json".to_string(),
            expected: "aa".to_string(),
            actual: "bb".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("model_delay.json"));
        assert!(text.contains("expected aa"));
        assert!(text.contains("got bb"));
    }
}
