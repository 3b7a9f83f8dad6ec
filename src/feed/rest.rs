use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::FeedConfig;
use crate::error::{Error, Result};
use crate::feed::PriceFeed;
use crate::types::price::PriceRecord;

/// REST price feed: a single GET of a JSON price list.
pub struct RestFeed {
    client: Client,
    url: String,
}

impl RestFeed {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::FeedUnavailable(e.to_string()))?;

        Ok(RestFeed {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl PriceFeed for RestFeed {
    async fn fetch_latest(&self) -> Result<Vec<PriceRecord>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::FeedUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::FeedUnavailable(format!("HTTP {}", response.status())));
        }

        let records: Vec<PriceRecord> = response
            .json()
            .await
            .map_err(|e| Error::Deserialization(e.to_string()))?;

        tracing::debug!(count = records.len(), "fetched price snapshot");
        Ok(records)
    }
}
