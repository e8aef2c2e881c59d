//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::auth::{Credentials, RequestSigner};
use crate::client::PublicClient;
use crate::error::RestResult;
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a PublicClient,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a PublicClient, credentials: &'a Credentials) -> Self {
        Self { client, credentials }
    }

    /// Make an authenticated GET request
    async fn get(&self, request_path: &str) -> RestResult<Value> {
        let signer = RequestSigner::new(self.credentials);
        let headers = signer.headers(&Method::GET, request_path, "");
        self.client
            .send(Method::GET, request_path, None, Some(headers))
            .await
    }

    /// Get a list of trading accounts
    #[instrument(skip(self))]
    pub async fn list_accounts(&self) -> RestResult<Value> {
        self.get("/accounts").await
    }

    /// Information for a single account
    #[instrument(skip(self))]
    pub async fn get_account(&self, account_id: &str) -> RestResult<Value> {
        self.get(&format!("/accounts/{}", account_id)).await
    }

    /// List account activity (ledger), sorted latest first
    ///
    /// Returns the first page only; the service paginates but this client
    /// does not follow continuation cursors.
    #[instrument(skip(self))]
    pub async fn get_account_history(&self, account_id: &str) -> RestResult<Value> {
        self.get(&format!("/accounts/{}/ledger", account_id)).await
    }

    /// List holds placed on an account for active orders or pending
    /// withdrawals
    ///
    /// Returns the first page only.
    #[instrument(skip(self))]
    pub async fn get_holds(&self, account_id: &str) -> RestResult<Value> {
        self.get(&format!("/accounts/{}/holds", account_id)).await
    }
}
