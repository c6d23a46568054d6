//! Query engine facade
//!
//! Each call fetches fresh collections from the injected [`DataSource`],
//! builds a request-scoped [`CorrelationIndex`] and discards it once the
//! result is produced. Nothing is cached between calls.

use crate::combinator::{self, Criteria};
use crate::dates::normalize_optional;
use crate::index::CorrelationIndex;
use crate::models::{Artist, ArtistId, DateRecord, LocationRecord, RelationRecord};
use crate::source::{fetch_catalog, DataSource};
use crate::suggest;
use groupie_common::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Search input as received from the caller
///
/// `date` and `first_album` may be `YYYY-MM-DD` or `DD-MM-YYYY`; they are
/// validated before anything is fetched.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    pub search: String,
    pub date: Option<String>,
    pub location: String,
    pub year: Option<i32>,
    pub members: Option<usize>,
    pub first_album: Option<String>,
    pub alphabetical: bool,
    pub recent_concerts: bool,
}

impl FilterQuery {
    /// Validate and normalize into combinator criteria
    ///
    /// # Errors
    /// `Error::InvalidInput` for an unparseable `date` or `first_album`.
    pub fn criteria(&self) -> Result<Criteria> {
        Ok(Criteria {
            search: self.search.trim().to_string(),
            date: normalize_optional(self.date.as_deref())?.unwrap_or_default(),
            location: self.location.trim().to_string(),
            year: self.year,
            members: self.members,
            first_album: normalize_optional(self.first_album.as_deref())?,
            alphabetical: self.alphabetical,
            recent_concerts: self.recent_concerts,
        })
    }
}

/// One artist with whatever the other collections hold for its id
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub locations: Option<LocationRecord>,
    pub dates: Option<DateRecord>,
    pub relation: Option<RelationRecord>,
}

/// Entry point used by the HTTP layer
#[derive(Clone)]
pub struct QueryEngine {
    source: Arc<dyn DataSource>,
}

impl QueryEngine {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Run a filtered search
    pub async fn search(&self, query: &FilterQuery) -> Result<Vec<Artist>> {
        let criteria = query.criteria()?;
        let catalog = fetch_catalog(self.source.as_ref()).await?;
        let index = CorrelationIndex::build(catalog);

        let results = combinator::run(&index, &criteria)?;
        info!(
            search = %criteria.search,
            date = %criteria.date,
            location = %criteria.location,
            results = results.len(),
            "Search completed"
        );
        Ok(results)
    }

    /// Tagged artist and member names containing `query`
    pub async fn suggest_names(&self, query: &str) -> Result<Vec<String>> {
        let index = self.source.fetch_index().await?;
        let artists = self.source.fetch_artists(&index.artists).await?;
        Ok(suggest::by_name(&artists, query))
    }

    /// City and country names from locations containing `query`
    pub async fn suggest_locations(&self, query: &str) -> Result<Vec<String>> {
        let index = self.source.fetch_index().await?;
        let locations = self.source.fetch_locations(&index.locations).await?;
        Ok(suggest::by_location(&locations, query))
    }

    /// Artist `id` with its correlated records
    ///
    /// # Errors
    /// `Error::NotFound` when no artist has that id.
    pub async fn artist_detail(&self, id: ArtistId) -> Result<ArtistDetail> {
        let catalog = fetch_catalog(self.source.as_ref()).await?;
        let index = CorrelationIndex::build(catalog);

        let artist = index.resolve_artist(id)?.clone();
        let correlated = index.lookup(id);

        Ok(ArtistDetail {
            artist,
            locations: correlated.location.cloned(),
            dates: correlated.dates.cloned(),
            relation: correlated.relation.cloned(),
        })
    }
}
