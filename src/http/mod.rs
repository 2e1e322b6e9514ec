//! HTTP API Module
//!
//! REST surface for the flight prediction service, enabled by the
//! `http-server` feature.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Router    │  URL routing, CORS, compression, request tracing
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │   Handlers   │  Request validation, blocking-pool dispatch
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │   AppState   │  Artifact store + lazily loaded inference context
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │  Inference   │  Feature building, chained models, correction
//! └──────────────┘
//! ```
//!
//! # Endpoints
//!
//! - `POST /predict` - Score one flight request
//! - `GET /airlines` - Airline vocabulary of the loaded encoders
//! - `GET /cities` - City vocabulary of the loaded encoders
//! - `GET /health` - Liveness and model status

#[cfg(feature = "http-server")]
pub mod dto;
#[cfg(feature = "http-server")]
pub mod error;
#[cfg(feature = "http-server")]
pub mod handlers;
#[cfg(feature = "http-server")]
pub mod router;
#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub use router::create_router;
#[cfg(feature = "http-server")]
pub use state::AppState;
