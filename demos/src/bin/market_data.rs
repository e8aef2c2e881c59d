//! Demo 1: Public Market Data Tour
//!
//! Showcases: products, ticker, order book, candles, 24h stats
//!
//! Run: cargo run --bin market_data

use colored::*;
use gdax_rest::{types::products, PublicClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  GDAX MARKET DATA".cyan().bold());
    println!("{}", "  gdax-rest demo - public endpoints".cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = PublicClient::new();

    let time = client.get_server_time().await?;
    println!("{} Server time: {}", "✓".green(), time["iso"]);

    let products_list = client.get_products().await?;
    let count = products_list.as_array().map(|a| a.len()).unwrap_or(0);
    println!("{} {} products available", "✓".green(), count);

    let ticker = client.get_product_ticker(products::BTC_USD).await?;
    println!(
        "{} {} last trade: {} ({} 24h volume)",
        "✓".green(),
        products::BTC_USD.yellow(),
        ticker["price"],
        ticker["volume"]
    );

    let book = client.get_product_order_book(products::BTC_USD, 1).await?;
    println!(
        "{} Best bid: {}  best ask: {}",
        "✓".green(),
        book["bids"][0][0],
        book["asks"][0][0]
    );

    let candles = client
        .get_historic_rates(products::BTC_USD, None, None, Some(3600))
        .await?;
    println!(
        "{} {} hourly candles fetched",
        "✓".green(),
        candles.as_array().map(|a| a.len()).unwrap_or(0)
    );

    let stats = client.get_24hr_stats(products::BTC_USD).await?;
    println!(
        "{} 24h range: {} - {}",
        "✓".green(),
        stats["low"],
        stats["high"]
    );

    Ok(())
}
