//! REST API client for the GDAX cryptocurrency exchange
//!
//! This crate provides a thin client over GDAX's REST API: public market
//! data endpoints plus authenticated account and order endpoints.
//!
//! # Features
//!
//! - **Market Data**: products, order books, tickers, trades, candles
//! - **Accounts**: balances, ledger, holds
//! - **Orders**: place, cancel, and list orders
//!
//! Responses are returned as decoded [`serde_json::Value`] exactly as the
//! service sent them. This library performs no schema validation, no
//! retries, and no pagination; callers own those policies.
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each request is signed with
//! HMAC-SHA256 over `timestamp + method + request_path + body` as
//! specified by the exchange's API documentation, and carries the
//! `CB-ACCESS-*` headers. [`PublicClient`] holds no credentials and cannot
//! sign; [`PrivateClient`] composes a public client with a signer.
//!
//! # Example
//!
//! ```no_run
//! use gdax_rest::{PrivateClient, PublicClient};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = PublicClient::new();
//!     let ticker = client.get_product_ticker("BTC-USD").await?;
//!     println!("BTC-USD: {}", ticker);
//!
//!     // Private endpoints (auth required)
//!     let private = PrivateClient::from_env()?;
//!     let order = private.limit_buy("BTC-USD", dec!(100.00), dec!(1.0)).await?;
//!     println!("placed: {}", order);
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types
pub use auth::{Credentials, RequestSigner, SignedHeaders};
pub use client::{ClientConfig, PrivateClient, PublicClient, DEFAULT_BASE_URL, SANDBOX_BASE_URL};
pub use error::{RestError, RestResult};

// Re-export the order request model
pub use types::{
    CancelAfter, OrderRequest, OrderSide, OrderStatus, OrderType, SelfTradePrevention, TimeInForce,
};
