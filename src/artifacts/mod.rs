//! Model store: the persisted artifacts a prediction run depends on.
//!
//! The training pipeline exports everything the service needs as a
//! directory of JSON files: three tree ensembles, two imputer/scaler pairs,
//! two label encoders, a training config, and an optional checksum
//! manifest. Loading is all-or-nothing; a directory that fails any check
//! leaves the service without models rather than with a partial set.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  FsArtifactStore (store.rs)                          │
//! │  - file reads, optional checksum verification        │
//! └───────────────────┬──────────────────────────────────┘
//!                     │ read_json::<T>
//! ┌───────────────────▼──────────────────────────────────┐
//! │  Typed artifacts                                     │
//! │  - GbtClassifier (tree.rs)                           │
//! │  - Imputer / Scaler (transform.rs)                   │
//! │  - LabelEncoder (encoder.rs)                         │
//! │  - ModelConfig (store.rs)                            │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod classifier;
pub mod encoder;
pub mod error;
pub mod manifest;
pub mod store;
pub mod transform;
pub mod tree;

pub use classifier::{argmax, Classifier};
pub use encoder::LabelEncoder;
pub use error::{ArtifactError, ArtifactResult};
pub use manifest::{compute_checksum, Manifest};
pub use store::{FsArtifactStore, ModelConfig};
pub use transform::{Imputer, Scaler, TransformPair};
pub use tree::{GbtClassifier, Objective};
