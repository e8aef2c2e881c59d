//! Types for GDAX REST API requests
//!
//! Responses are passed through as untyped `serde_json::Value`; the remote
//! schema is owned by the exchange, not this library. The only structured
//! model is the outgoing order request.

use rust_decimal::Decimal;
use serde::Serialize;

/// Product identifiers offered as of 1/31/2018
pub mod products {
    pub const BTC_USD: &str = "BTC-USD";
    pub const BTC_EUR: &str = "BTC-EUR";
    pub const BTC_GBP: &str = "BTC-GBP";
    pub const BCH_BTC: &str = "BCH-BTC";
    pub const BCH_USD: &str = "BCH-USD";
    pub const BCH_EUR: &str = "BCH-EUR";
    pub const ETH_BTC: &str = "ETH-BTC";
    pub const ETH_EUR: &str = "ETH-EUR";
    pub const ETH_USD: &str = "ETH-USD";
    pub const LTC_BTC: &str = "LTC-BTC";
    pub const LTC_EUR: &str = "LTC-EUR";
    pub const LTC_USD: &str = "LTC-USD";
}

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market order
    Market,
    /// Stop order
    Stop,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::Market => write!(f, "market"),
            Self::Stop => write!(f, "stop"),
        }
    }
}

/// Time in force for orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeInForce {
    /// Good till cancelled
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    /// Good till time (requires `cancel_after`)
    #[serde(rename = "GTT")]
    GoodTillTime,
    /// Immediate or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
    /// Fill or kill
    #[serde(rename = "FOK")]
    FillOrKill,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoodTillCancelled => write!(f, "GTC"),
            Self::GoodTillTime => write!(f, "GTT"),
            Self::ImmediateOrCancel => write!(f, "IOC"),
            Self::FillOrKill => write!(f, "FOK"),
        }
    }
}

/// Self-trade prevention flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelfTradePrevention {
    /// Decrement and cancel (exchange default)
    #[serde(rename = "dc")]
    DecrementAndCancel,
    /// Cancel oldest
    #[serde(rename = "co")]
    CancelOldest,
    /// Cancel newest
    #[serde(rename = "cn")]
    CancelNewest,
    /// Cancel both
    #[serde(rename = "cb")]
    CancelBoth,
}

/// Lifetime for GTT orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CancelAfter {
    /// One minute
    Min,
    /// One hour
    Hour,
    /// One day
    Day,
}

/// Order status filter for listing orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Resting on the book
    Open,
    /// Not yet on the book
    Pending,
    /// Stop order waiting for its trigger
    Active,
    /// Filled or canceled
    Done,
    /// Any status
    All,
}

impl OrderStatus {
    /// Get the API string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Done => "done",
            Self::All => "all",
        }
    }
}

/// Request to place an order
///
/// Serialization emits a field only when present: unset optional fields
/// are omitted entirely, never sent as `null`, so the exchange applies its
/// own defaults. Field order matches the wire format the exchange documents.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Order side
    pub side: OrderSide,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Product identifier, e.g. "BTC-USD"
    pub product_id: String,
    /// Price per unit (limit) or stop trigger price (stop)
    #[serde(with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Amount in base currency
    #[serde(with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
    pub size: Option<Decimal>,
    /// Amount of quote currency to spend (market orders)
    #[serde(with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
    pub funds: Option<Decimal>,
    /// Order lifetime policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Lifetime for GTT orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<CancelAfter>,
    /// Maker-only flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
    /// Client-supplied order identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_oid: Option<String>,
    /// Self-trade prevention flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stp: Option<SelfTradePrevention>,
}

impl OrderRequest {
    /// Create a limit order
    ///
    /// Defaults to `GTC` time in force and post-only; both can be changed
    /// with the builder methods.
    pub fn limit(product_id: impl Into<String>, side: OrderSide, size: Decimal, price: Decimal) -> Self {
        Self {
            side,
            order_type: OrderType::Limit,
            product_id: product_id.into(),
            price: Some(price),
            size: Some(size),
            funds: None,
            time_in_force: Some(TimeInForce::GoodTillCancelled),
            cancel_after: None,
            post_only: Some(true),
            client_oid: None,
            stp: None,
        }
    }

    /// Create a market order
    ///
    /// Exactly one of `size`/`funds` must be set via [`with_size`] or
    /// [`with_funds`] before submission.
    ///
    /// [`with_size`]: Self::with_size
    /// [`with_funds`]: Self::with_funds
    pub fn market(product_id: impl Into<String>, side: OrderSide) -> Self {
        Self {
            side,
            order_type: OrderType::Market,
            product_id: product_id.into(),
            price: None,
            size: None,
            funds: None,
            time_in_force: None,
            cancel_after: None,
            post_only: None,
            client_oid: None,
            stp: None,
        }
    }

    /// Create a stop order triggered at `stop_price`
    pub fn stop(
        product_id: impl Into<String>,
        side: OrderSide,
        size: Decimal,
        stop_price: Decimal,
    ) -> Self {
        Self {
            side,
            order_type: OrderType::Stop,
            product_id: product_id.into(),
            price: Some(stop_price),
            size: Some(size),
            funds: None,
            time_in_force: None,
            cancel_after: None,
            post_only: None,
            client_oid: None,
            stp: None,
        }
    }

    /// Set the order size (base currency)
    pub fn with_size(mut self, size: Decimal) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the funds to spend (quote currency)
    pub fn with_funds(mut self, funds: Decimal) -> Self {
        self.funds = Some(funds);
        self
    }

    /// Set time in force
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Set the GTT lifetime
    pub fn with_cancel_after(mut self, cancel_after: CancelAfter) -> Self {
        self.cancel_after = Some(cancel_after);
        self
    }

    /// Set or clear the maker-only flag
    pub fn with_post_only(mut self, post_only: bool) -> Self {
        self.post_only = Some(post_only);
        self
    }

    /// Set a client-supplied order identifier
    pub fn with_client_oid(mut self, client_oid: impl Into<String>) -> Self {
        self.client_oid = Some(client_oid.into());
        self
    }

    /// Set the self-trade prevention flag
    pub fn with_stp(mut self, stp: SelfTradePrevention) -> Self {
        self.stp = Some(stp);
        self
    }
}
