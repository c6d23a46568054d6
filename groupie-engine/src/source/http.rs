//! HTTP data source over the upstream JSON API
//!
//! One `reqwest::Client` with a bounded timeout; a timeout is reported like
//! any other fetch failure.

use super::DataSource;
use crate::models::{
    ApiIndex, Artist, DateRecord, IndexEnvelope, LocationRecord, RelationRecord,
};
use groupie_common::config::UpstreamConfig;
use groupie_common::{Error, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upstream API client
pub struct HttpDataSource {
    http_client: reqwest::Client,
    index_url: String,
}

impl HttpDataSource {
    pub fn new(index_url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Fetch(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            index_url: index_url.into(),
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        Self::new(config.index_url.clone(), config.timeout(), &config.user_agent)
    }

    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// GET `url` and decode the body as `T`
    async fn get_json<T: DeserializeOwned>(&self, collection: &str, url: &str) -> Result<T> {
        tracing::debug!(collection, url, "Querying upstream API");

        let response = self.http_client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::fetch(collection, format!("timed out requesting {}", url))
            } else {
                Error::fetch(collection, e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::fetch(
                collection,
                format!("HTTP {} from {}: {}", status.as_u16(), url, error_text),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::fetch(collection, format!("decode failed: {}", e)))
    }
}

#[async_trait::async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_index(&self) -> Result<ApiIndex> {
        self.get_json("index", &self.index_url).await
    }

    async fn fetch_artists(&self, url: &str) -> Result<Vec<Artist>> {
        self.get_json("artists", url).await
    }

    async fn fetch_locations(&self, url: &str) -> Result<Vec<LocationRecord>> {
        let envelope: IndexEnvelope<LocationRecord> = self.get_json("locations", url).await?;
        Ok(envelope.index)
    }

    async fn fetch_dates(&self, url: &str) -> Result<Vec<DateRecord>> {
        let envelope: IndexEnvelope<DateRecord> = self.get_json("dates", url).await?;
        Ok(envelope.index)
    }

    async fn fetch_relations(&self, url: &str) -> Result<Vec<RelationRecord>> {
        let envelope: IndexEnvelope<RelationRecord> = self.get_json("relation", url).await?;
        Ok(envelope.index)
    }
}
