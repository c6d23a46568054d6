//! Test Helper Utilities
//!
//! Shared fixtures for groupie-engine integration tests
#![allow(dead_code)]

pub mod upstream;

use async_trait::async_trait;
use groupie_common::{Error, Result};
use groupie_engine::models::ApiIndex;
use groupie_engine::{
    Artist, ArtistId, Catalog, DataSource, DateRecord, InMemorySource, LocationRecord,
    RelationRecord,
};
use std::collections::BTreeMap;

pub use upstream::{spawn_upstream, UpstreamBehavior};

pub fn artist(id: ArtistId, name: &str, members: &[&str], year: i32, first_album: &str) -> Artist {
    Artist {
        id,
        image: String::new(),
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
        creation_date: year,
        first_album: first_album.to_string(),
        locations: String::new(),
        concert_dates: String::new(),
        relations: String::new(),
        show_concert: false,
    }
}

/// Small catalog with ids deliberately out of positional alignment:
/// the secondary collections list records in a different order than the
/// artists, and carry no record for artist 3.
pub fn tour_catalog() -> Catalog {
    Catalog {
        artists: vec![
            artist(1, "Queen", &["Freddie Mercury", "Brian May", "John Deacon", "Roger Taylor"], 1970, "14-12-1973"),
            artist(2, "Gorillaz", &["Damon Albarn", "Jamie Hewlett"], 1998, "26-03-2001"),
            artist(3, "Kendrick Lamar", &["Kendrick Lamar"], 2004, "02-07-2011"),
            artist(4, "Eagles", &["Don Henley", "Glenn Frey", "Joe Walsh", "Timothy B. Schmit"], 1971, "01-06-1972"),
        ],
        locations: vec![
            LocationRecord {
                id: 4,
                locations: vec!["los_angeles-usa".to_string(), "new_york-usa".to_string()],
                dates: String::new(),
            },
            LocationRecord {
                id: 1,
                locations: vec!["london-uk".to_string(), "paris-france".to_string()],
                dates: String::new(),
            },
            LocationRecord {
                id: 2,
                locations: vec!["paris-france".to_string(), "osaka-japan".to_string()],
                dates: String::new(),
            },
        ],
        dates: vec![
            DateRecord {
                id: 2,
                dates: vec!["*02-04-2019".to_string(), "10-10-2020".to_string()],
            },
            DateRecord {
                id: 4,
                dates: vec!["22-08-2019".to_string()],
            },
            DateRecord {
                id: 1,
                dates: vec!["10-10-2020".to_string(), "05-05-2021".to_string()],
            },
        ],
        relations: vec![
            relation(1, &[("london-uk", &["05-05-2021"]), ("paris-france", &["10-10-2020"])]),
            relation(2, &[("paris-france", &["02-04-2019"]), ("osaka-japan", &["10-10-2020"])]),
            relation(4, &[("los_angeles-usa", &["22-08-2019"])]),
        ],
    }
}

pub fn relation(id: ArtistId, pairs: &[(&str, &[&str])]) -> RelationRecord {
    let dates_locations: BTreeMap<String, Vec<String>> = pairs
        .iter()
        .map(|(loc, ds)| (loc.to_string(), ds.iter().map(|d| d.to_string()).collect()))
        .collect();
    RelationRecord { id, dates_locations }
}

pub fn ids(artists: &[Artist]) -> Vec<ArtistId> {
    artists.iter().map(|a| a.id).collect()
}

/// Which collection a [`FailingSource`] should fail on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Index,
    Artists,
    Locations,
    Dates,
    Relations,
}

/// Serves the fixture catalog but fails one collection
pub struct FailingSource {
    inner: InMemorySource,
    fail_on: FailOn,
}

impl FailingSource {
    pub fn new(catalog: Catalog, fail_on: FailOn) -> Self {
        Self {
            inner: InMemorySource::new(catalog),
            fail_on,
        }
    }

    fn check(&self, which: FailOn) -> Result<()> {
        if self.fail_on == which {
            Err(Error::fetch(&format!("{:?}", which).to_lowercase(), "injected failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DataSource for FailingSource {
    async fn fetch_index(&self) -> Result<ApiIndex> {
        self.check(FailOn::Index)?;
        self.inner.fetch_index().await
    }

    async fn fetch_artists(&self, url: &str) -> Result<Vec<Artist>> {
        self.check(FailOn::Artists)?;
        self.inner.fetch_artists(url).await
    }

    async fn fetch_locations(&self, url: &str) -> Result<Vec<LocationRecord>> {
        self.check(FailOn::Locations)?;
        self.inner.fetch_locations(url).await
    }

    async fn fetch_dates(&self, url: &str) -> Result<Vec<DateRecord>> {
        self.check(FailOn::Dates)?;
        self.inner.fetch_dates(url).await
    }

    async fn fetch_relations(&self, url: &str) -> Result<Vec<RelationRecord>> {
        self.check(FailOn::Relations)?;
        self.inner.fetch_relations(url).await
    }
}
