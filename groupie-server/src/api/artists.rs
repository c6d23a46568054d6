//! Per-artist detail

use axum::{
    extract::{Path, State},
    Json,
};
use groupie_engine::{ArtistDetail, ArtistId};

use crate::{ApiError, ApiResult, AppState};

/// GET /api/artists/:id
///
/// The artist plus its location, date and relation records, correlated by
/// identifier. Missing secondary records serialize as `null`.
pub async fn artist_detail(
    State(state): State<AppState>,
    Path(id): Path<ArtistId>,
) -> ApiResult<Json<ArtistDetail>> {
    match state.engine.artist_detail(id).await {
        Ok(detail) => Ok(Json(detail)),
        Err(e) => Err(state.record_error(ApiError::from_lookup(e)).await),
    }
}
