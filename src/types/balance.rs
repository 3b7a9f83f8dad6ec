use serde::{Deserialize, Serialize};

/// One raw wallet balance as delivered by the balance feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub currency: String,
    pub amount: f64,
    #[serde(rename = "blockchain")]
    pub chain: String,
}

/// A display-ready balance row. Owned by the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayRow {
    pub currency: String,
    pub chain: String,
    pub amount: f64,
    pub usd_value: f64,
    pub formatted_amount: String,
}

impl DisplayRow {
    /// Unique row key; at most one row exists per (chain, currency) pair.
    pub fn key(&self) -> (&str, &str) {
        (&self.chain, &self.currency)
    }
}
