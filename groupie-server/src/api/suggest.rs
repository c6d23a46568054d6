//! Autocomplete endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{ApiError, ApiResult, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SuggestParams {
    pub query: String,
}

/// GET /api/suggest?query=
///
/// Artist and member names tagged with their kind.
pub async fn suggest_names(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> ApiResult<Json<Vec<String>>> {
    match state.engine.suggest_names(&params.query).await {
        Ok(names) => Ok(Json(names)),
        Err(e) => Err(state.record_error(ApiError::from(e)).await),
    }
}

/// GET /api/suggest/geo?query=
pub async fn suggest_locations(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> ApiResult<Json<Vec<String>>> {
    match state.engine.suggest_locations(&params.query).await {
        Ok(places) => Ok(Json(places)),
        Err(e) => Err(state.record_error(ApiError::from(e)).await),
    }
}
