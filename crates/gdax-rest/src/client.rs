//! Public and private client implementations
//!
//! Authentication is an additive capability: [`PrivateClient`] composes a
//! [`PublicClient`] with [`Credentials`] rather than specializing it. A
//! `PublicClient` holds no credentials and cannot produce signed headers
//! at all.

use crate::auth::{self, Credentials, SignedHeaders};
use crate::endpoints::{AccountEndpoints, MarketEndpoints, OrderEndpoints};
use crate::error::{RestError, RestResult};
use crate::types::{OrderRequest, OrderSide, OrderStatus};
use reqwest::{Client, Method};
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Production REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.gdax.com";
/// Sandbox REST endpoint
pub const SANDBOX_BASE_URL: &str = "https://public.sandbox.gdax.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
///
/// Immutable after the client is constructed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout in seconds (connect + read)
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL (e.g. [`SANDBOX_BASE_URL`])
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set a custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Unauthenticated client for public market data endpoints
///
/// # Example
///
/// ```no_run
/// use gdax_rest::PublicClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PublicClient::new();
///     let ticker = client.get_product_ticker("BTC-USD").await?;
///     println!("{}", ticker);
///     Ok(())
/// }
/// ```
pub struct PublicClient {
    http: Client,
    base_url: String,
}

impl PublicClient {
    /// Create a new client against the production endpoint
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let http = builder.build().expect("Failed to create HTTP client");

        // Normalize once so path composition never doubles a slash.
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Self { http, base_url }
    }

    /// The normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get market data endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get a list of available currency pairs for trading
    pub async fn get_products(&self) -> RestResult<Value> {
        self.market().get_products().await
    }

    /// Get the order book for a product at depth `level` (1, 2, or 3)
    pub async fn get_product_order_book(&self, product_id: &str, level: u8) -> RestResult<Value> {
        self.market().get_product_order_book(product_id, level).await
    }

    /// Snapshot of the last trade, best bid/ask, and 24h volume
    pub async fn get_product_ticker(&self, product_id: &str) -> RestResult<Value> {
        self.market().get_product_ticker(product_id).await
    }

    /// List the latest trades for a product
    pub async fn get_trades(&self, product_id: &str) -> RestResult<Value> {
        self.market().get_trades(product_id).await
    }

    /// Historic candles for a product
    pub async fn get_historic_rates(
        &self,
        product_id: &str,
        start: Option<&str>,
        end: Option<&str>,
        granularity: Option<u32>,
    ) -> RestResult<Value> {
        self.market()
            .get_historic_rates(product_id, start, end, granularity)
            .await
    }

    /// 24hr stats for a product
    pub async fn get_24hr_stats(&self, product_id: &str) -> RestResult<Value> {
        self.market().get_24hr_stats(product_id).await
    }

    /// List known currencies
    pub async fn get_currencies(&self) -> RestResult<Value> {
        self.market().get_currencies().await
    }

    /// Get the API server time
    pub async fn get_server_time(&self) -> RestResult<Value> {
        self.market().get_server_time().await
    }

    /// Issue a request and decode the JSON response
    ///
    /// The one place every endpoint funnels through. `request_path` is the
    /// path plus query string; when `auth` is present its headers are
    /// attached verbatim, and a body always travels with
    /// `Content-Type: application/json`.
    pub(crate) async fn send(
        &self,
        method: Method,
        request_path: &str,
        body: Option<String>,
        auth: Option<SignedHeaders>,
    ) -> RestResult<Value> {
        let url = format!("{}{}", self.base_url, request_path);
        debug!(%method, request_path, "sending request");

        let mut request = self.http.request(method, &url);
        if let Some(headers) = auth {
            request = request
                .header(auth::HEADER_KEY, headers.key)
                .header(auth::HEADER_SIGN, headers.signature)
                .header(auth::HEADER_TIMESTAMP, headers.timestamp)
                .header(auth::HEADER_PASSPHRASE, headers.passphrase);
        }
        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(RestError::transport)?;
        let status = response.status();
        let text = response.text().await.map_err(RestError::transport)?;

        if !status.is_success() {
            return Err(RestError::Api {
                status: status.as_u16(),
                body: serde_json::from_str(&text).ok(),
            });
        }

        serde_json::from_str(&text).map_err(|e| RestError::Parse(e.to_string()))
    }
}

impl Default for PublicClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PublicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Authenticated client for account and order endpoints
///
/// Holds a [`PublicClient`]'s capability set plus signing credentials.
/// Credentials are immutable for the lifetime of the client; key rotation
/// means constructing a new instance.
///
/// # Example
///
/// ```no_run
/// use gdax_rest::{ClientConfig, Credentials, PrivateClient, SANDBOX_BASE_URL};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Credentials::from_env()?;
///     let config = ClientConfig::new().with_base_url(SANDBOX_BASE_URL);
///     let client = PrivateClient::with_config(credentials, config);
///
///     let accounts = client.list_accounts().await?;
///     println!("{}", accounts);
///     Ok(())
/// }
/// ```
pub struct PrivateClient {
    public: PublicClient,
    credentials: Credentials,
}

impl PrivateClient {
    /// Create an authenticated client against the production endpoint
    ///
    /// # Errors
    /// Fails with [`RestError::InvalidCredentials`] if `secret` is not
    /// valid base64.
    pub fn new(
        key: impl Into<String>,
        secret: impl AsRef<str>,
        passphrase: impl Into<String>,
    ) -> RestResult<Self> {
        let credentials = Credentials::new(key, secret, passphrase)?;
        Ok(Self::with_config(credentials, ClientConfig::default()))
    }

    /// Create an authenticated client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Self {
        Self {
            public: PublicClient::with_config(config),
            credentials,
        }
    }

    /// Create an authenticated client from environment variables
    ///
    /// Reads `GDAX_API_KEY`, `GDAX_API_SECRET`, and `GDAX_API_PASSPHRASE`.
    pub fn from_env() -> RestResult<Self> {
        let credentials = Credentials::from_env()?;
        Ok(Self::with_config(credentials, ClientConfig::default()))
    }

    /// The public market-data capability set
    ///
    /// Requests issued through this client carry no authentication headers.
    pub fn public(&self) -> &PublicClient {
        &self.public
    }

    /// Get account endpoints
    pub fn accounts(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.public, &self.credentials)
    }

    /// Get order endpoints
    pub fn orders(&self) -> OrderEndpoints<'_> {
        OrderEndpoints::new(&self.public, &self.credentials)
    }

    /// Get a list of trading accounts
    pub async fn list_accounts(&self) -> RestResult<Value> {
        self.accounts().list_accounts().await
    }

    /// Information for a single account
    pub async fn get_account(&self, account_id: &str) -> RestResult<Value> {
        self.accounts().get_account(account_id).await
    }

    /// List account activity (ledger), latest first
    pub async fn get_account_history(&self, account_id: &str) -> RestResult<Value> {
        self.accounts().get_account_history(account_id).await
    }

    /// List holds placed on an account
    pub async fn get_holds(&self, account_id: &str) -> RestResult<Value> {
        self.accounts().get_holds(account_id).await
    }

    /// Place an order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        self.orders().place_order(order).await
    }

    /// Place a limit buy order
    pub async fn limit_buy(&self, product_id: &str, price: Decimal, size: Decimal) -> RestResult<Value> {
        self.place_order(&OrderRequest::limit(product_id, OrderSide::Buy, size, price))
            .await
    }

    /// Place a limit sell order
    pub async fn limit_sell(&self, product_id: &str, price: Decimal, size: Decimal) -> RestResult<Value> {
        self.place_order(&OrderRequest::limit(product_id, OrderSide::Sell, size, price))
            .await
    }

    /// Place a market buy order; exactly one of `size`/`funds` must be set
    pub async fn market_buy(
        &self,
        product_id: &str,
        size: Option<Decimal>,
        funds: Option<Decimal>,
    ) -> RestResult<Value> {
        let mut order = OrderRequest::market(product_id, OrderSide::Buy);
        order.size = size;
        order.funds = funds;
        self.place_order(&order).await
    }

    /// Place a market sell order; exactly one of `size`/`funds` must be set
    pub async fn market_sell(
        &self,
        product_id: &str,
        size: Option<Decimal>,
        funds: Option<Decimal>,
    ) -> RestResult<Value> {
        let mut order = OrderRequest::market(product_id, OrderSide::Sell);
        order.size = size;
        order.funds = funds;
        self.place_order(&order).await
    }

    /// Place a stop buy order triggered at `stop_price`
    pub async fn stop_buy(&self, product_id: &str, stop_price: Decimal, size: Decimal) -> RestResult<Value> {
        self.place_order(&OrderRequest::stop(product_id, OrderSide::Buy, size, stop_price))
            .await
    }

    /// Place a stop sell order triggered at `stop_price`
    pub async fn stop_sell(&self, product_id: &str, stop_price: Decimal, size: Decimal) -> RestResult<Value> {
        self.place_order(&OrderRequest::stop(product_id, OrderSide::Sell, size, stop_price))
            .await
    }

    /// Cancel a previously placed order
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<Value> {
        self.orders().cancel_order(order_id).await
    }

    /// Cancel all open orders, optionally scoped to one product
    ///
    /// Best-effort: orders that fill or are canceled concurrently are
    /// simply absent from the returned id list.
    pub async fn cancel_all(&self, product_id: Option<&str>) -> RestResult<Value> {
        self.orders().cancel_all(product_id).await
    }

    /// List orders, optionally filtered by product and status
    ///
    /// An empty `statuses` slice applies no status filter. Returns the
    /// first page only.
    pub async fn list_orders(
        &self,
        product_id: Option<&str>,
        statuses: &[OrderStatus],
    ) -> RestResult<Value> {
        self.orders().list_orders(product_id, statuses).await
    }

    /// Get a single order by id
    pub async fn get_order(&self, order_id: &str) -> RestResult<Value> {
        self.orders().get_order(order_id).await
    }
}

impl std::fmt::Debug for PrivateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateClient")
            .field("base_url", &self.public.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}
