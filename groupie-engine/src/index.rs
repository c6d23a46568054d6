//! Correlation Index
//!
//! Per-request id -> record lookup over the four collections. Records are
//! kept in their collection vectors; the maps hold positions into them, keyed
//! by each record's declared `id` field. Positions in one collection say
//! nothing about positions in another.

use crate::models::{Artist, ArtistId, Catalog, DateRecord, LocationRecord, RelationRecord};
use groupie_common::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Records of the secondary collections that share one identifier.
/// Each part is independently optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct Correlated<'a> {
    pub location: Option<&'a LocationRecord>,
    pub dates: Option<&'a DateRecord>,
    pub relation: Option<&'a RelationRecord>,
}

/// Read-only, request-scoped lookup structure
#[derive(Debug)]
pub struct CorrelationIndex {
    catalog: Catalog,
    locations: HashMap<ArtistId, usize>,
    dates: HashMap<ArtistId, usize>,
    relations: HashMap<ArtistId, usize>,
}

/// Map id -> first position carrying it
fn positions<T>(records: &[T], id_of: impl Fn(&T) -> ArtistId) -> HashMap<ArtistId, usize> {
    let mut map = HashMap::with_capacity(records.len());
    for (pos, record) in records.iter().enumerate() {
        map.entry(id_of(record)).or_insert(pos);
    }
    map
}

impl CorrelationIndex {
    pub fn build(catalog: Catalog) -> Self {
        let locations = positions(&catalog.locations, |r| r.id);
        let dates = positions(&catalog.dates, |r| r.id);
        let relations = positions(&catalog.relations, |r| r.id);

        debug!(
            artists = catalog.artists.len(),
            locations = locations.len(),
            dates = dates.len(),
            relations = relations.len(),
            "Built correlation index"
        );

        Self {
            catalog,
            locations,
            dates,
            relations,
        }
    }

    /// Secondary records for `id`; absence is not an error
    pub fn lookup(&self, id: ArtistId) -> Correlated<'_> {
        Correlated {
            location: self.locations.get(&id).map(|&p| &self.catalog.locations[p]),
            dates: self.dates.get(&id).map(|&p| &self.catalog.dates[p]),
            relation: self.relations.get(&id).map(|&p| &self.catalog.relations[p]),
        }
    }

    /// The artist carrying `id`
    ///
    /// # Errors
    /// `Error::NotFound` when no artist has that id, which means another
    /// collection refers to an artist the artist collection does not know.
    pub fn resolve_artist(&self, id: ArtistId) -> Result<&Artist> {
        self.catalog
            .artists
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::NotFound(format!("no artist with id {}", id)))
    }

    /// Id of the artist whose name equals `name` exactly
    pub fn artist_id_by_name(&self, name: &str) -> Option<ArtistId> {
        self.catalog
            .artists
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.id)
    }

    pub fn artists(&self) -> &[Artist] {
        &self.catalog.artists
    }

    pub fn location_records(&self) -> &[LocationRecord] {
        &self.catalog.locations
    }

    pub fn date_records(&self) -> &[DateRecord] {
        &self.catalog.dates
    }

    pub fn relation_records(&self) -> &[RelationRecord] {
        &self.catalog.relations
    }
}
