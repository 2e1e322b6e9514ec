//! Filesystem-backed artifact store.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{ArtifactError, ArtifactResult};
use super::manifest::{compute_checksum, Manifest, MANIFEST_FILE};

/// Cancellation classifier artifact.
pub const MODEL_CANCELLED: &str = "model_cancelled.json";
/// Cancellation cause classifier artifact.
pub const MODEL_CANCEL_CODE: &str = "model_cancel_code.json";
/// Delay severity classifier artifact.
pub const MODEL_DELAY: &str = "model_delay.json";
/// Cancellation-schema imputer artifact.
pub const IMPUTER: &str = "imputer.json";
/// Cancellation-schema scaler artifact.
pub const SCALER: &str = "scaler.json";
/// Delay-schema imputer artifact.
pub const IMPUTER_DELAY: &str = "imputer_delay.json";
/// Delay-schema scaler artifact.
pub const SCALER_DELAY: &str = "scaler_delay.json";
/// Airline vocabulary artifact.
pub const LABEL_ENC_AIRLINE: &str = "label_enc_airline.json";
/// City vocabulary artifact (fitted on origin cities, shared with
/// destinations).
pub const LABEL_ENC_ORIGIN: &str = "label_enc_origin.json";
/// Training configuration artifact.
pub const MODEL_CONFIG: &str = "model_config.json";

/// Training-time configuration exported alongside the models.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Cancellation-schema feature names in training order.
    pub features: Vec<String>,
    /// Decision threshold selected during training.
    ///
    /// Surfaced for observability; the serving decision uses the corrected
    /// threshold owned by the correction layer.
    pub best_threshold: f64,
    /// First training year.
    pub min_year: i32,
    /// Last training year.
    pub max_year: i32,
}

/// A directory of model artifacts with optional checksum verification.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    root: PathBuf,
    manifest: Option<Manifest>,
}

impl FsArtifactStore {
    /// Open an artifact directory.
    ///
    /// Reads `manifest.json` when present; its absence just disables
    /// verification. The artifacts themselves are read lazily.
    pub fn open(root: impl Into<PathBuf>) -> ArtifactResult<Self> {
        let root = root.into();
        let manifest_path = root.join(MANIFEST_FILE);
        let manifest = if manifest_path.exists() {
            let bytes = fs::read(&manifest_path).map_err(|source| ArtifactError::Io {
                artifact: MANIFEST_FILE.to_string(),
                source,
            })?;
            let manifest: Manifest =
                serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
                    artifact: MANIFEST_FILE.to_string(),
                    source,
                })?;
            debug!(artifacts = manifest.len(), "loaded artifact manifest");
            Some(manifest)
        } else {
            None
        };
        Ok(Self { root, manifest })
    }

    /// Directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True when a checksum manifest was found.
    pub fn has_manifest(&self) -> bool {
        self.manifest.is_some()
    }

    /// Read and parse one artifact, verifying its checksum when the
    /// manifest lists it.
    pub fn read_json<T: DeserializeOwned>(&self, name: &str) -> ArtifactResult<T> {
        let bytes = fs::read(self.root.join(name)).map_err(|source| ArtifactError::Io {
            artifact: name.to_string(),
            source,
        })?;

        if let Some(expected) = self.manifest.as_ref().and_then(|m| m.expected(name)) {
            let actual = compute_checksum(&bytes);
            if actual != expected {
                return Err(ArtifactError::ChecksumMismatch {
                    artifact: name.to_string(),
                    expected: expected.to_string(),
                    actual,
                });
            }
        }

        serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
            artifact: name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        value: i64,
    }

    #[test]
    fn test_read_json_without_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sample.json"), r#"{"value": 7}"#).unwrap();

        let store = FsArtifactStore::open(dir.path()).unwrap();
        assert!(!store.has_manifest());
        let sample: Sample = store.read_json("sample.json").unwrap();
        assert_eq!(sample, Sample { value: 7 });
    }

    #[test]
    fn test_missing_artifact_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::open(dir.path()).unwrap();
        let err = store.read_json::<Sample>("absent.json").unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
        assert_eq!(err.artifact(), "absent.json");
    }

    #[test]
    fn test_malformed_artifact_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sample.json"), "not json").unwrap();

        let store = FsArtifactStore::open(dir.path()).unwrap();
        let err = store.read_json::<Sample>("sample.json").unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }

    #[test]
    fn test_manifest_checksum_pass_and_fail() {
        let dir = tempfile::tempdir().unwrap();
        let body = r#"{"value": 1}"#;
        fs::write(dir.path().join("good.json"), body).unwrap();
        fs::write(dir.path().join("bad.json"), body).unwrap();

        let good_sum = compute_checksum(body.as_bytes());
        let manifest = format!(
            r#"{{"artifacts": {{"good.json": "{good_sum}", "bad.json": "0000"}}}}"#
        );
        fs::write(dir.path().join(MANIFEST_FILE), manifest).unwrap();

        let store = FsArtifactStore::open(dir.path()).unwrap();
        assert!(store.has_manifest());

        let sample: Sample = store.read_json("good.json").unwrap();
        assert_eq!(sample.value, 1);

        let err = store.read_json::<Sample>("bad.json").unwrap_err();
        assert!(matches!(err, ArtifactError::ChecksumMismatch { .. }));
    }

    #[test]
    fn test_unlisted_artifact_loads_unverified() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("extra.json"), r#"{"value": 3}"#).unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), r#"{"artifacts": {}}"#).unwrap();

        let store = FsArtifactStore::open(dir.path()).unwrap();
        let sample: Sample = store.read_json("extra.json").unwrap();
        assert_eq!(sample.value, 3);
    }

    #[test]
    fn test_malformed_manifest_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "{").unwrap();
        let err = FsArtifactStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
        assert_eq!(err.artifact(), MANIFEST_FILE);
    }

    #[test]
    fn test_model_config_shape() {
        let config: ModelConfig = serde_json::from_str(
            r#"{
                "features": ["YEAR_NORMALIZED", "MONTH"],
                "best_threshold": 0.5,
                "min_year": 2015,
                "max_year": 2024
            }"#,
        )
        .unwrap();
        assert_eq!(config.features.len(), 2);
        assert_eq!(config.best_threshold, 0.5);
        assert_eq!(config.min_year, 2015);
        assert_eq!(config.max_year, 2024);
    }
}
