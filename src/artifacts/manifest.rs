//! Integrity manifest for the artifact directory.

use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// File name of the optional integrity manifest.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Compute the SHA-256 checksum of artifact bytes as lowercase hex.
pub fn compute_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Expected checksums for artifact files, written by the export step.
///
/// The manifest is optional; when present, every artifact it lists is
/// verified on load. Artifacts it does not list load unverified.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    artifacts: BTreeMap<String, String>,
}

impl Manifest {
    /// Expected checksum for an artifact, if the manifest lists it.
    pub fn expected(&self, name: &str) -> Option<&str> {
        self.artifacts.get(name).map(String::as_str)
    }

    /// Number of listed artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// True when no artifacts are listed.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
