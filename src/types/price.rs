use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw observation from the price feed.
///
/// The feed may repeat a currency across snapshots and may omit the price
/// entirely; `observed_at` is only used as an orderable timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub currency: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(rename = "date")]
    pub observed_at: DateTime<Utc>,
}

impl PriceRecord {
    /// The price, if present, finite and strictly positive.
    pub fn valid_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite() && *p > 0.0)
    }
}

/// Canonical price for a single currency, derived from the raw feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub currency: String,
    pub price: f64,
}
