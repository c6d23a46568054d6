//! Test Helper Utilities
//!
//! Router fixtures for groupie-server integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use groupie_common::{Error, Result};
use groupie_engine::models::ApiIndex;
use groupie_engine::{
    Artist, ArtistId, Catalog, DataSource, DateRecord, InMemorySource, LocationRecord,
    QueryEngine, RelationRecord,
};
use groupie_server::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

fn artist(id: ArtistId, name: &str, members: &[&str], year: i32, first_album: &str) -> Artist {
    Artist {
        id,
        image: format!("https://example.test/{}.jpeg", id),
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

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Three artists; Daft Punk (id 3) has no secondary records
pub fn catalog() -> Catalog {
    let mut relation_1 = BTreeMap::new();
    relation_1.insert("dunedin-new_zealand".to_string(), strings(&["10-02-2020"]));
    relation_1.insert("london-uk".to_string(), strings(&["03-07-2019"]));
    let mut relation_2 = BTreeMap::new();
    relation_2.insert("london-uk".to_string(), strings(&["10-02-2020"]));

    Catalog {
        artists: vec![
            artist(1, "SOJA", &["Jacob Hemphill", "Bob Jefferson"], 1997, "05-06-2009"),
            artist(2, "Arctic Monkeys", &["Alex Turner", "Matt Helders", "Jamie Cook", "Nick O'Malley"], 2002, "23-01-2006"),
            artist(3, "Daft Punk", &["Thomas Bangalter", "Guy-Manuel de Homem-Christo"], 1993, "20-01-1997"),
        ],
        locations: vec![
            LocationRecord {
                id: 1,
                locations: strings(&["dunedin-new_zealand", "london-uk"]),
                dates: String::new(),
            },
            LocationRecord {
                id: 2,
                locations: strings(&["london-uk"]),
                dates: String::new(),
            },
        ],
        dates: vec![
            DateRecord {
                id: 1,
                dates: strings(&["*10-02-2020", "03-07-2019"]),
            },
            DateRecord {
                id: 2,
                dates: strings(&["10-02-2020"]),
            },
        ],
        relations: vec![
            RelationRecord {
                id: 1,
                dates_locations: relation_1,
            },
            RelationRecord {
                id: 2,
                dates_locations: relation_2,
            },
        ],
    }
}

/// Fails every upstream call
pub struct DownSource;

#[async_trait]
impl DataSource for DownSource {
    async fn fetch_index(&self) -> Result<ApiIndex> {
        Err(Error::fetch("index", "connection refused"))
    }

    async fn fetch_artists(&self, _url: &str) -> Result<Vec<Artist>> {
        Err(Error::fetch("artists", "connection refused"))
    }

    async fn fetch_locations(&self, _url: &str) -> Result<Vec<LocationRecord>> {
        Err(Error::fetch("locations", "connection refused"))
    }

    async fn fetch_dates(&self, _url: &str) -> Result<Vec<DateRecord>> {
        Err(Error::fetch("dates", "connection refused"))
    }

    async fn fetch_relations(&self, _url: &str) -> Result<Vec<RelationRecord>> {
        Err(Error::fetch("relation", "connection refused"))
    }
}

pub fn state_with(source: Arc<dyn DataSource>) -> AppState {
    AppState::new(QueryEngine::new(source))
}

pub fn test_state() -> AppState {
    state_with(Arc::new(InMemorySource::new(catalog())))
}

pub fn setup_app() -> axum::Router {
    build_router(test_state())
}

pub fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn extract_json(body: Body) -> Value {
    let bytes = body.collect().await.expect("Should read body").to_bytes();
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

pub fn names(body: &Value) -> Vec<String> {
    body["artists"]
        .as_array()
        .expect("artists array")
        .iter()
        .map(|a| a["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
