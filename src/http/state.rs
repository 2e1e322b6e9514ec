//! Application State
//!
//! Shared state passed to HTTP handlers: the artifact store, the lazily
//! loaded inference context, and the optional live weather enrichment.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use crate::artifacts::{ArtifactError, FsArtifactStore};
use crate::inference::InferenceContext;
use crate::weather::WeatherEnrichment;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Artifact directory the inference context loads from
    pub store: Arc<FsArtifactStore>,
    /// Loaded context; `None` until the first successful load
    context: Arc<RwLock<Option<Arc<InferenceContext>>>>,
    /// Live weather enrichment, when configured
    pub enrichment: Option<Arc<WeatherEnrichment>>,
}

impl AppState {
    /// Create new application state with no context loaded yet
    pub fn new(store: Arc<FsArtifactStore>) -> Self {
        Self {
            store,
            context: Arc::new(RwLock::new(None)),
            enrichment: None,
        }
    }

    /// Attach a live weather enrichment service
    pub fn with_enrichment(mut self, enrichment: Arc<WeatherEnrichment>) -> Self {
        self.enrichment = Some(enrichment);
        self
    }

    /// Currently loaded context, if any
    pub fn context(&self) -> Option<Arc<InferenceContext>> {
        self.context.read().clone()
    }

    /// Return the loaded context, attempting one load if none is present.
    ///
    /// The load is all-or-nothing; a failure leaves the slot empty so a
    /// later request retries against a possibly repaired artifact
    /// directory.
    pub fn context_or_reload(&self) -> Result<Arc<InferenceContext>, ArtifactError> {
        if let Some(context) = self.context.read().as_ref() {
            return Ok(Arc::clone(context));
        }

        let mut slot = self.context.write();
        // Another request may have completed the load while we waited.
        if let Some(context) = slot.as_ref() {
            return Ok(Arc::clone(context));
        }

        match InferenceContext::load(&self.store) {
            Ok(context) => {
                let context = Arc::new(context);
                *slot = Some(Arc::clone(&context));
                Ok(context)
            }
            Err(err) => {
                warn!(error = %err, "model artifact load failed");
                Err(err)
            }
        }
    }
}
