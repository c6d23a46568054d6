//! Loopback upstream API serving a catalog over real HTTP

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use groupie_engine::Catalog;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// How the fake upstream answers the relation collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamBehavior {
    Healthy,
    /// Relation endpoint answers 500
    RelationServerError,
    /// Relation endpoint answers with a body that is not the expected shape
    RelationMalformed,
    /// Relation endpoint stalls for two seconds
    RelationSlow,
}

#[derive(Clone)]
struct UpstreamState {
    base: String,
    catalog: Arc<Catalog>,
    behavior: UpstreamBehavior,
}

async fn index(State(state): State<UpstreamState>) -> Json<Value> {
    Json(json!({
        "artists": format!("{}/api/artists", state.base),
        "locations": format!("{}/api/locations", state.base),
        "dates": format!("{}/api/dates", state.base),
        "relation": format!("{}/api/relation", state.base),
    }))
}

async fn artists(State(state): State<UpstreamState>) -> Json<Value> {
    Json(json!(state.catalog.artists))
}

async fn locations(State(state): State<UpstreamState>) -> Json<Value> {
    Json(json!({ "index": state.catalog.locations }))
}

async fn dates(State(state): State<UpstreamState>) -> Json<Value> {
    Json(json!({ "index": state.catalog.dates }))
}

async fn relation(State(state): State<UpstreamState>) -> (StatusCode, Json<Value>) {
    match state.behavior {
        UpstreamBehavior::Healthy => {
            (StatusCode::OK, Json(json!({ "index": state.catalog.relations })))
        }
        UpstreamBehavior::RelationServerError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "boom" })),
        ),
        UpstreamBehavior::RelationMalformed => {
            (StatusCode::OK, Json(json!({ "index": "not-a-list" })))
        }
        UpstreamBehavior::RelationSlow => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            (StatusCode::OK, Json(json!({ "index": state.catalog.relations })))
        }
    }
}

/// Start the fake upstream on an ephemeral loopback port
///
/// Returns the URL of the index document.
pub async fn spawn_upstream(catalog: Catalog, behavior: UpstreamBehavior) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    let base = format!("http://{}", addr);

    let state = UpstreamState {
        base: base.clone(),
        catalog: Arc::new(catalog),
        behavior,
    };

    let app = Router::new()
        .route("/api", get(index))
        .route("/api/artists", get(artists))
        .route("/api/locations", get(locations))
        .route("/api/dates", get(dates))
        .route("/api/relation", get(relation))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("upstream server");
    });

    format!("{}/api", base)
}
