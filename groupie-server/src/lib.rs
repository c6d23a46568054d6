//! groupie-server library - JSON surface over the query engine
//!
//! Handlers stay thin: they translate query parameters, call
//! [`QueryEngine`] and map engine errors onto HTTP statuses.

use axum::Router;
use chrono::{DateTime, Utc};
use groupie_engine::QueryEngine;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Query engine over the configured data source
    pub engine: QueryEngine,
    /// Server startup time, reported as uptime by /health
    pub startup_time: DateTime<Utc>,
    /// Last failed request, for diagnostics
    pub last_error: Arc<RwLock<Option<String>>>,
}

impl AppState {
    /// Create new application state
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            engine,
            startup_time: Utc::now(),
            last_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Log a failed request and remember it for /health
    pub async fn record_error(&self, err: ApiError) -> ApiError {
        tracing::error!("Request failed: {}", err);
        *self.last_error.write().await = Some(err.to_string());
        err
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/api/search", get(api::search))
        .route("/api/suggest", get(api::suggest_names))
        .route("/api/suggest/geo", get(api::suggest_locations))
        .route("/api/artists/:id", get(api::artist_detail));

    Router::new()
        .merge(api)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
