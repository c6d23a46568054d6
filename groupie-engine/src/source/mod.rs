//! Data Source Client
//!
//! The engine never talks to the network directly; it is handed a
//! [`DataSource`] so tests and offline runs can substitute fixture data.

pub mod http;
pub mod memory;

pub use http::HttpDataSource;
pub use memory::InMemorySource;

use crate::models::{ApiIndex, Artist, Catalog, DateRecord, LocationRecord, RelationRecord};
use groupie_common::Result;
use tracing::debug;

/// Source of the index document and the four collections
///
/// Implementations surface every network, status and decode problem as
/// `Error::Fetch`. No retries happen above this trait.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the top-level document listing the collection URLs
    async fn fetch_index(&self) -> Result<ApiIndex>;

    async fn fetch_artists(&self, url: &str) -> Result<Vec<Artist>>;

    async fn fetch_locations(&self, url: &str) -> Result<Vec<LocationRecord>>;

    async fn fetch_dates(&self, url: &str) -> Result<Vec<DateRecord>>;

    async fn fetch_relations(&self, url: &str) -> Result<Vec<RelationRecord>>;
}

/// Fetch all four collections for one request
///
/// The collections are requested concurrently once the index is known. The
/// first failure aborts the whole fetch; no partial catalog is returned.
pub async fn fetch_catalog(source: &dyn DataSource) -> Result<Catalog> {
    let index = source.fetch_index().await?;

    let (artists, locations, dates, relations) = tokio::try_join!(
        source.fetch_artists(&index.artists),
        source.fetch_locations(&index.locations),
        source.fetch_dates(&index.dates),
        source.fetch_relations(&index.relation),
    )?;

    debug!(
        artists = artists.len(),
        locations = locations.len(),
        dates = dates.len(),
        relations = relations.len(),
        "Fetched catalog"
    );

    Ok(Catalog {
        artists,
        locations,
        dates,
        relations,
    })
}
