pub mod rest;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::price::PriceRecord;

pub use rest::RestFeed;

/// A source of raw price snapshots.
///
/// One call returns one complete owned snapshot or an error; the engine
/// never observes a half-fetched list. Retry and backoff policy belongs to
/// the caller.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<PriceRecord>>;
}
