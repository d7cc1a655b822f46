//! sentinel-api library - fake news classification service
//!
//! Serves `POST /predict` over a TF-IDF vectorizer and linear classifier
//! loaded once at startup.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod service;

pub use error::{ApiError, ApiResult};
pub use service::{InferenceService, Verdict};

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded artifacts (read-only)
    pub service: InferenceService,
}

impl AppState {
    pub fn new(service: InferenceService) -> Self {
        Self { service }
    }
}

/// Build application router
///
/// CORS is open to every origin on every route.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::post;

    Router::new()
        .route("/predict", post(api::predict))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
