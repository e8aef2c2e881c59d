//! Private order endpoints
//!
//! These endpoints require authentication. Every placement method funnels
//! through [`OrderEndpoints::place_order`], so the signature always covers
//! the exact serialized body bytes.

use crate::auth::{Credentials, RequestSigner};
use crate::client::PublicClient;
use crate::endpoints::push_query;
use crate::error::{RestError, RestResult};
use crate::types::{OrderRequest, OrderStatus, OrderType};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

/// Private order endpoints
pub struct OrderEndpoints<'a> {
    client: &'a PublicClient,
    credentials: &'a Credentials,
}

impl<'a> OrderEndpoints<'a> {
    pub fn new(client: &'a PublicClient, credentials: &'a Credentials) -> Self {
        Self { client, credentials }
    }

    /// Make an authenticated request; the signature covers the exact body
    async fn signed(
        &self,
        method: Method,
        request_path: &str,
        body: Option<String>,
    ) -> RestResult<Value> {
        let signer = RequestSigner::new(self.credentials);
        let headers = signer.headers(&method, request_path, body.as_deref().unwrap_or(""));
        self.client.send(method, request_path, body, Some(headers)).await
    }

    /// Place an order
    ///
    /// Market orders must set exactly one of `size`/`funds`; anything else
    /// is rejected before any network I/O.
    #[instrument(skip(self, order), fields(product_id = %order.product_id, side = %order.side, order_type = %order.order_type))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        if order.order_type == OrderType::Market && order.size.is_some() == order.funds.is_some() {
            return Err(RestError::InvalidParameter(
                "market orders require exactly one of size or funds".to_string(),
            ));
        }

        let body = serde_json::to_string(order).map_err(|e| RestError::Parse(e.to_string()))?;

        debug!(
            "Placing {} {} order for {}",
            order.side, order.order_type, order.product_id
        );
        self.signed(Method::POST, "/orders", Some(body)).await
    }

    /// Cancel a previously placed order
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<Value> {
        debug!("Cancelling order {}", order_id);
        self.signed(Method::DELETE, &format!("/orders/{}", order_id), None)
            .await
    }

    /// Cancel all open orders, optionally scoped to one product
    ///
    /// Returns the ids the service reports as canceled. Best-effort:
    /// orders that fill or are canceled concurrently with this call are
    /// simply absent from the result.
    #[instrument(skip(self))]
    pub async fn cancel_all(&self, product_id: Option<&str>) -> RestResult<Value> {
        let mut path = String::from("/orders");
        if let Some(product_id) = product_id {
            push_query(&mut path, "product_id", product_id);
        }

        debug!("Cancelling all open orders");
        self.signed(Method::DELETE, &path, None).await
    }

    /// List orders, optionally filtered by product and status
    ///
    /// An empty `statuses` slice applies no status filter, listing all
    /// open, pending, and active orders. Returns the first page only; the
    /// service paginates but this client does not follow continuation
    /// cursors.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        product_id: Option<&str>,
        statuses: &[OrderStatus],
    ) -> RestResult<Value> {
        let mut path = String::from("/orders");
        for status in statuses {
            push_query(&mut path, "status", status.as_str());
        }
        if let Some(product_id) = product_id {
            push_query(&mut path, "product_id", product_id);
        }

        self.signed(Method::GET, &path, None).await
    }

    /// Get a single order by id
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> RestResult<Value> {
        self.signed(Method::GET, &format!("/orders/{}", order_id), None)
            .await
    }
}
