pub mod loader;

use serde::{Deserialize, Serialize};

pub use loader::AppConfig;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FeedConfig {
    pub url: String,
    pub timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            url: "https://interview.switcheo.com/prices.json".to_string(),
            timeout_ms: 5_000,
        }
    }
}

/// Fractional digits used at the display boundary.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub balance_decimals: usize,
    pub quote_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            balance_decimals: crate::BALANCE_DISPLAY_DECIMALS,
            quote_decimals: crate::QUOTE_DISPLAY_DECIMALS,
        }
    }
}
