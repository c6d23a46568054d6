//! In-memory data source serving a fixed catalog

use super::DataSource;
use crate::models::{ApiIndex, Artist, Catalog, DateRecord, LocationRecord, RelationRecord};
use groupie_common::Result;

/// Serves a fixed [`Catalog`]; collection URLs are ignored
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    catalog: Catalog,
}

impl InMemorySource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait::async_trait]
impl DataSource for InMemorySource {
    async fn fetch_index(&self) -> Result<ApiIndex> {
        Ok(ApiIndex {
            artists: "memory://artists".to_string(),
            locations: "memory://locations".to_string(),
            dates: "memory://dates".to_string(),
            relation: "memory://relation".to_string(),
        })
    }

    async fn fetch_artists(&self, _url: &str) -> Result<Vec<Artist>> {
        Ok(self.catalog.artists.clone())
    }

    async fn fetch_locations(&self, _url: &str) -> Result<Vec<LocationRecord>> {
        Ok(self.catalog.locations.clone())
    }

    async fn fetch_dates(&self, _url: &str) -> Result<Vec<DateRecord>> {
        Ok(self.catalog.dates.clone())
    }

    async fn fetch_relations(&self, _url: &str) -> Result<Vec<RelationRecord>> {
        Ok(self.catalog.relations.clone())
    }
}
