//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::client::PublicClient;
use crate::endpoints::push_query;
use crate::error::{RestError, RestResult};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

/// Order book depth levels accepted by the exchange
const VALID_BOOK_LEVELS: [u8; 3] = [1, 2, 3];

/// Candle granularities accepted by the exchange, in seconds
const VALID_GRANULARITIES: [u32; 6] = [60, 300, 900, 3600, 21600, 86400];

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a PublicClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a PublicClient) -> Self {
        Self { client }
    }

    async fn get(&self, request_path: &str) -> RestResult<Value> {
        self.client.send(Method::GET, request_path, None, None).await
    }

    /// Get a list of available currency pairs for trading
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> RestResult<Value> {
        self.get("/products").await
    }

    /// Get the order book for a product
    ///
    /// # Arguments
    /// * `product_id` - Product identifier, e.g. "BTC-USD"
    /// * `level` - Depth level: 1 best bid/ask, 2 top 50 aggregated, 3 full
    ///   book. Any other value is rejected before any network I/O.
    #[instrument(skip(self))]
    pub async fn get_product_order_book(&self, product_id: &str, level: u8) -> RestResult<Value> {
        if !VALID_BOOK_LEVELS.contains(&level) {
            return Err(RestError::InvalidParameter(format!(
                "order book level must be 1, 2, or 3, got {}",
                level
            )));
        }

        debug!("Fetching level {} order book for {}", level, product_id);
        self.get(&format!("/products/{}/book?level={}", product_id, level))
            .await
    }

    /// Snapshot of the last trade, best bid/ask, and 24h volume
    #[instrument(skip(self))]
    pub async fn get_product_ticker(&self, product_id: &str) -> RestResult<Value> {
        self.get(&format!("/products/{}/ticker", product_id)).await
    }

    /// List the latest trades for a product
    #[instrument(skip(self))]
    pub async fn get_trades(&self, product_id: &str) -> RestResult<Value> {
        self.get(&format!("/products/{}/trades", product_id)).await
    }

    /// Historic candles for a product, grouped by `granularity` seconds
    ///
    /// # Arguments
    /// * `start` - Start time in ISO 8601 (optional)
    /// * `end` - End time in ISO 8601 (optional)
    /// * `granularity` - One of 60, 300, 900, 3600, 21600, 86400 (optional)
    ///
    /// Unset parameters are omitted so the service applies its defaults.
    #[instrument(skip(self))]
    pub async fn get_historic_rates(
        &self,
        product_id: &str,
        start: Option<&str>,
        end: Option<&str>,
        granularity: Option<u32>,
    ) -> RestResult<Value> {
        if let Some(granularity) = granularity {
            if !VALID_GRANULARITIES.contains(&granularity) {
                return Err(RestError::InvalidParameter(format!(
                    "granularity must be one of {:?}, got {}",
                    VALID_GRANULARITIES, granularity
                )));
            }
        }

        let mut path = format!("/products/{}/candles", product_id);
        if let Some(start) = start {
            push_query(&mut path, "start", start);
        }
        if let Some(end) = end {
            push_query(&mut path, "end", end);
        }
        if let Some(granularity) = granularity {
            push_query(&mut path, "granularity", &granularity.to_string());
        }

        self.get(&path).await
    }

    /// 24hr stats for a product; volume in base units, open/high/low in quote
    #[instrument(skip(self))]
    pub async fn get_24hr_stats(&self, product_id: &str) -> RestResult<Value> {
        // Trailing slash matches the service route.
        self.get(&format!("/products/{}/stats/", product_id)).await
    }

    /// List known currencies
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<Value> {
        self.get("/currencies").await
    }

    /// Get the API server time
    #[instrument(skip(self))]
    pub async fn get_server_time(&self) -> RestResult<Value> {
        self.get("/time").await
    }
}
