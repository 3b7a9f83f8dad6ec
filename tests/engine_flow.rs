use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use SwapInfra::BALANCE_DISPLAY_DECIMALS;
use SwapInfra::catalog::PriceCatalog;
use SwapInfra::config::FeedConfig;
use SwapInfra::conversion::{self, Side};
use SwapInfra::feed::{PriceFeed, RestFeed};
use SwapInfra::pipeline;
use SwapInfra::types::balance::BalanceRecord;
use SwapInfra::types::priority::PriorityTable;

fn balance(currency: &str, amount: f64, chain: &str) -> BalanceRecord {
    BalanceRecord {
        currency: currency.to_string(),
        amount,
        chain: chain.to_string(),
    }
}

#[tokio::test]
async fn feed_snapshot_to_quotes_and_display_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/prices.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"currency": "ETH", "date": "2024-01-01T00:00:00Z", "price": 2500.0},
            {"currency": "ETH", "date": "2024-02-01T00:00:00Z", "price": 2600.0},
            {"currency": "OSMO", "date": "2024-01-15T00:00:00Z", "price": 0.95},
            {"currency": "USDC", "date": "2024-01-15T00:00:00Z", "price": 1.0},
            {"currency": "BROKEN", "date": "2024-01-15T00:00:00Z", "price": null},
            {"currency": "FREE", "date": "2024-01-15T00:00:00Z", "price": 0.0}
        ])))
        .mount(&server)
        .await;

    let feed = RestFeed::new(&FeedConfig {
        url: format!("{}/prices.json", server.uri()),
        timeout_ms: 1_000,
    })
    .unwrap();

    let records = feed.fetch_latest().await.unwrap();
    let catalog = PriceCatalog::build(&records);

    // Duplicates collapse to the latest observation; invalid records vanish.
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.price("ETH"), Some(2600.0));
    assert!(catalog.get("BROKEN").is_none());
    assert!(catalog.get("FREE").is_none());

    let quote = conversion::quote(&catalog, "ETH", "USDC", 1.0, Side::From).unwrap();
    assert_eq!(quote.formatted_to_amount(6), "2600.000000");

    let priorities: PriorityTable = [
        ("Osmosis".to_string(), 100),
        ("Ethereum".to_string(), 50),
        ("Arbitrum".to_string(), 30),
    ]
    .into_iter()
    .collect();

    let balances = vec![
        balance("ETH", 2.0, "Ethereum"),
        balance("OSMO", 100.5, "Osmosis"),
        balance("ARB", 0.0, "Arbitrum"),
    ];

    let rows = pipeline::render(&balances, &priorities, &catalog, BALANCE_DISPLAY_DECIMALS);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key(), ("Osmosis", "OSMO"));
    assert_eq!(rows[0].usd_value, 0.95 * 100.5);
    assert_eq!(rows[0].formatted_amount, "100.5000");
    assert_eq!(rows[1].key(), ("Ethereum", "ETH"));
    assert_eq!(rows[1].usd_value, 5200.0);
}

#[tokio::test]
async fn a_price_tick_only_reformats_the_standing_selection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/prices.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"currency": "ETH", "date": "2024-01-01T00:00:00Z", "price": 2500.0}
        ])))
        .mount(&server)
        .await;

    let feed = RestFeed::new(&FeedConfig {
        url: format!("{}/prices.json", server.uri()),
        timeout_ms: 1_000,
    })
    .unwrap();

    let priorities: PriorityTable = [("Ethereum".to_string(), 50)].into_iter().collect();
    let balances = vec![balance("ETH", 1.0, "Ethereum")];
    let selected = pipeline::select(&balances, &priorities);

    let catalog = PriceCatalog::build(&feed.fetch_latest().await.unwrap());
    let rows = pipeline::format(&selected, &catalog, BALANCE_DISPLAY_DECIMALS);
    assert_eq!(rows[0].usd_value, 2500.0);

    // Fresher snapshot, same selection.
    let newer = PriceCatalog::build(&[SwapInfra::types::price::PriceRecord {
        currency: "ETH".to_string(),
        price: Some(2600.0),
        observed_at: "2024-02-01T00:00:00Z".parse().unwrap(),
    }]);
    let rows = pipeline::format(&selected, &newer, BALANCE_DISPLAY_DECIMALS);
    assert_eq!(rows[0].usd_value, 2600.0);
}
