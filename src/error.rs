use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Price Feed Errors
    #[error("Price feed unavailable: {0}")]
    FeedUnavailable(String),

    #[error("Feed deserialization failed: {0}")]
    Deserialization(String),

    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Chain priority out of range: chain={chain}, priority={priority}, must be > {floor}")]
    PriorityOutOfRange {
        chain: String,
        priority: i32,
        floor: i32,
    },

    // IO Errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
