//! Fixture catalog shared by the unit tests

use crate::models::{Artist, ArtistId, Catalog, DateRecord, LocationRecord, RelationRecord};
use std::collections::BTreeMap;

pub fn artist(id: ArtistId, name: &str, members: &[&str], year: i32, first_album: &str) -> Artist {
    Artist {
        id,
        image: format!("https://example.test/img/{}.jpeg", id),
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

pub fn locations(id: ArtistId, slugs: &[&str]) -> LocationRecord {
    LocationRecord {
        id,
        locations: slugs.iter().map(|s| s.to_string()).collect(),
        dates: String::new(),
    }
}

pub fn dates(id: ArtistId, dates: &[&str]) -> DateRecord {
    DateRecord {
        id,
        dates: dates.iter().map(|d| d.to_string()).collect(),
    }
}

pub fn relation(id: ArtistId, pairs: &[(&str, &[&str])]) -> RelationRecord {
    let dates_locations: BTreeMap<String, Vec<String>> = pairs
        .iter()
        .map(|(loc, ds)| (loc.to_string(), ds.iter().map(|d| d.to_string()).collect()))
        .collect();
    RelationRecord { id, dates_locations }
}

/// Four artists, deliberately not in alphabetical order
pub fn catalog() -> Catalog {
    Catalog {
        artists: vec![
            artist(
                1,
                "Queen",
                &["Freddie Mercury", "Brian May", "John Deacon", "Roger Taylor"],
                1970,
                "14-12-1973",
            ),
            artist(
                2,
                "Pink Floyd",
                &["Roger Waters", "Nick Mason", "David Gilmour", "Richard Wright"],
                1965,
                "05-08-1967",
            ),
            artist(3, "Bobby McFerrin", &["Bobby McFerrin"], 1977, "01-01-1982"),
            artist(4, "ACDC", &["Angus Young", "Malcolm Young", "Bon Scott"], 1973, "17-02-1975"),
        ],
        locations: vec![
            locations(1, &["london-uk", "paris-france", "new_york-usa"]),
            locations(2, &["los_angeles-usa", "london-uk"]),
            locations(3, &["sao_paulo-brazil"]),
            locations(4, &["paris-france", "berlin-germany"]),
        ],
        dates: vec![
            dates(1, &["*10-10-2020", "05-05-2021"]),
            dates(2, &["03-03-2021", "01-01-2019"]),
            dates(3, &["*28-02-2020"]),
            dates(4, &["10-10-2020", "12-12-2018"]),
        ],
        relations: vec![
            relation(
                1,
                &[
                    ("london-uk", &["05-05-2021"]),
                    ("paris-france", &["10-10-2020"]),
                    ("new_york-usa", &["01-01-2019"]),
                ],
            ),
            relation(2, &[("los_angeles-usa", &["03-03-2021"]), ("london-uk", &["01-01-2019"])]),
            relation(3, &[("sao_paulo-brazil", &["28-02-2020"])]),
            relation(4, &[("paris-france", &["10-10-2020"]), ("berlin-germany", &["12-12-2018"])]),
        ],
    }
}

pub fn ids(artists: &[Artist]) -> Vec<ArtistId> {
    artists.iter().map(|a| a.id).collect()
}
