//! Demo 2: Authenticated Account Summary
//!
//! Showcases: signed requests against the sandbox - accounts, holds, open
//! orders
//!
//! Requires GDAX_API_KEY, GDAX_API_SECRET, GDAX_API_PASSPHRASE in the
//! environment (sandbox credentials).
//!
//! Run: cargo run --bin account_summary

use colored::*;
use gdax_rest::{ClientConfig, Credentials, PrivateClient, SANDBOX_BASE_URL};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  GDAX ACCOUNT SUMMARY".cyan().bold());
    println!("{}", "  gdax-rest demo - authenticated endpoints (sandbox)".cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!("  Set GDAX_API_KEY, GDAX_API_SECRET, GDAX_API_PASSPHRASE");
            return Ok(());
        }
    };

    let config = ClientConfig::new().with_base_url(SANDBOX_BASE_URL);
    let client = PrivateClient::with_config(credentials, config);

    let accounts = client.list_accounts().await?;
    println!("{} Accounts:", "✓".green());
    for account in accounts.as_array().into_iter().flatten() {
        println!(
            "    {:<5} balance {}  available {}  hold {}",
            account["currency"].as_str().unwrap_or("?").yellow(),
            account["balance"],
            account["available"],
            account["hold"]
        );
    }

    if let Some(account_id) = accounts
        .as_array()
        .and_then(|a| a.first())
        .and_then(|a| a["id"].as_str())
    {
        let holds = client.get_holds(account_id).await?;
        println!(
            "{} {} holds on account {}",
            "✓".green(),
            holds.as_array().map(|a| a.len()).unwrap_or(0),
            account_id
        );
    }

    let orders = client.list_orders(None, &[]).await?;
    println!(
        "{} {} open orders",
        "✓".green(),
        orders.as_array().map(|a| a.len()).unwrap_or(0)
    );

    Ok(())
}
