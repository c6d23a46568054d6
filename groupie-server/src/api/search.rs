//! Filtered artist search
//!
//! Query parameters arrive as raw form values. The sentinels the search
//! form sends for "no filter" (`year=1950`, `members=0`, an absent
//! checkbox) are translated here so the engine only sees options.

use axum::{
    extract::{Query, State},
    Json,
};
use groupie_engine::{Artist, FilterQuery};
use serde::{Deserialize, Serialize};

use crate::{ApiError, ApiResult, AppState};

/// Creation year the form sends when the year slider is untouched
pub const YEAR_UNSET: i32 = 1950;

/// Member count the form sends when no member box is ticked
pub const MEMBERS_UNSET: usize = 0;

/// Query parameters for GET /api/search
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub search: String,
    pub date: String,
    pub location: String,
    pub year: Option<String>,
    pub members: Option<String>,
    pub first_album: String,
    pub alpha: Option<String>,
    pub concert: Option<String>,
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: Option<&str>) -> ApiResult<Option<T>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("{} must be a number, got {:?}", name, value))),
    }
}

fn checked(raw: Option<&str>) -> bool {
    raw == Some("on")
}

impl SearchParams {
    /// Translate form values into an engine query
    pub fn to_filter_query(&self) -> ApiResult<FilterQuery> {
        let year = parse_number::<i32>("year", self.year.as_deref())?
            .filter(|year| *year != YEAR_UNSET);
        let members = parse_number::<usize>("members", self.members.as_deref())?
            .filter(|count| *count != MEMBERS_UNSET);

        Ok(FilterQuery {
            search: self.search.clone(),
            date: Some(self.date.clone()),
            location: self.location.clone(),
            year,
            members,
            first_album: Some(self.first_album.clone()),
            alphabetical: checked(self.alpha.as_deref()),
            recent_concerts: checked(self.concert.as_deref()),
        })
    }
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub artists: Vec<Artist>,
}

/// GET /api/search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    let query = match params.to_filter_query() {
        Ok(query) => query,
        Err(e) => return Err(state.record_error(e).await),
    };

    match state.engine.search(&query).await {
        Ok(artists) => Ok(Json(SearchResponse {
            count: artists.len(),
            artists,
        })),
        Err(e) => Err(state.record_error(ApiError::from(e)).await),
    }
}
