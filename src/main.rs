use SwapInfra::catalog::PriceCatalog;
use SwapInfra::config::AppConfig;
use SwapInfra::conversion::{self, Side};
use SwapInfra::feed::{PriceFeed, RestFeed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SwapInfra::observability::tracing::init();

    let env = std::env::var("SWAPINFRA_ENV").unwrap_or_else(|_| "default".to_string());
    let config = AppConfig::load(&env)?;

    let feed = RestFeed::new(&config.feed)?;
    let records = feed.fetch_latest().await?;
    let catalog = PriceCatalog::build(&records);
    tracing::info!(currencies = catalog.len(), "price catalog ready");

    for entry in catalog.entries() {
        println!("{:>10}  {}", entry.currency, entry.price);
    }

    // Sample quote between the first two listed currencies.
    if let [first, second, ..] = catalog.entries() {
        match conversion::quote(&catalog, &first.currency, &second.currency, 1.0, Side::From) {
            Ok(quote) => tracing::info!(
                from = %quote.from_currency,
                to = %quote.to_currency,
                rate = %quote.formatted_rate(config.display.quote_decimals),
                to_amount = %quote.formatted_to_amount(config.display.quote_decimals),
                "sample quote"
            ),
            Err(reason) => tracing::warn!(?reason, "no quote available"),
        }
    }

    Ok(())
}
