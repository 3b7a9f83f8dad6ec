pub mod catalog;
pub mod config;
pub mod conversion;
pub mod error;
pub mod feed;
pub mod observability;
pub mod pipeline;
pub mod types;

// Fractional digits for conversion quote amounts at the display boundary
pub const QUOTE_DISPLAY_DECIMALS: usize = 6;

// Fractional digits for wallet balance amounts at the display boundary
pub const BALANCE_DISPLAY_DECIMALS: usize = 4;
