use std::collections::HashMap;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::config::{DisplayConfig, FeedConfig};
use crate::error::{Error, Result};
use crate::types::priority::{DEFAULT_PRIORITY, PriorityTable};

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    pub chains: HashMap<String, i32>,
}

impl AppConfig {
    pub fn load(env: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SWAPINFRA"))
            .build()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        let app: AppConfig = config
            .try_deserialize()
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        app.validate()?;
        Ok(app)
    }

    /// Configured ranks must sit strictly above the sentinel, otherwise the
    /// balance filter could not tell a configured chain from an unknown one.
    fn validate(&self) -> Result<()> {
        for (chain, &priority) in &self.chains {
            if priority <= DEFAULT_PRIORITY {
                return Err(Error::PriorityOutOfRange {
                    chain: chain.clone(),
                    priority,
                    floor: DEFAULT_PRIORITY,
                });
            }
        }
        Ok(())
    }

    pub fn priority_table(&self) -> PriorityTable {
        PriorityTable::new(self.chains.clone())
    }
}
