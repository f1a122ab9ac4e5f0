// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP client for the transfer API's script-transactions endpoint.

use reqwest::{Client, StatusCode};
use tracing::info;

use super::batch::TransactionBatch;
use super::environment::Environment;
use super::error::ForwarderError;

pub const SCRIPT_TRANSACTIONS_PATH: &str = "/api/script-transactions";

#[derive(Clone)]
pub struct ScriptTransactionsClient {
    base_url: String,
    auth_token: String,
    http: Client,
}

impl ScriptTransactionsClient {
    /// Client for an arbitrary base URL. No request timeout is set.
    pub fn new(
        base_url: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ForwarderError> {
        let http = Client::builder()
            .build()
            .map_err(|e| ForwarderError::Client(e.to_string()))?;

        Ok(Self::with_http_client(base_url, auth_token, http))
    }

    /// Client reusing a preconfigured `reqwest::Client`.
    pub fn with_http_client(
        base_url: impl Into<String>,
        auth_token: impl Into<String>,
        http: Client,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
            http,
        }
    }

    pub fn for_environment(
        environment: Environment,
        auth_token: impl Into<String>,
    ) -> Result<Self, ForwarderError> {
        Self::new(environment.base_url(), auth_token)
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            SCRIPT_TRANSACTIONS_PATH
        )
    }

    /// POST `batch`; anything but 200 is a failure.
    pub async fn submit(&self, batch: &TransactionBatch) -> Result<(), ForwarderError> {
        let endpoint = self.endpoint();
        info!(
            endpoint = %endpoint,
            count = batch.transactions().len(),
            "Posting script transactions"
        );

        let response = self
            .http
            .post(&endpoint)
            .query(&[("auth_token", self.auth_token.as_str())])
            .json(batch)
            .send()
            .await
            .map_err(|e| ForwarderError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ForwarderError::RequestFailed { status, body });
        }

        Ok(())
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for ScriptTransactionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptTransactionsClient")
            .field("base_url", &self.base_url)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forwarder::test_server;

    #[test]
    fn endpoint_joins_base_url_and_path() {
        let client = ScriptTransactionsClient::new("http://localhost:3000/", "t").unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:3000/api/script-transactions"
        );

        let staging = ScriptTransactionsClient::for_environment(Environment::Staging, "t").unwrap();
        assert_eq!(
            staging.endpoint(),
            "https://dev-crypto-ops.vercel.app/api/script-transactions"
        );
    }

    #[test]
    fn debug_output_redacts_token() {
        let client = ScriptTransactionsClient::new("http://localhost:3000", "secret-token").unwrap();
        assert!(!format!("{client:?}").contains("secret-token"));
    }

    #[tokio::test]
    async fn posts_batch_with_token_query() {
        let server = test_server::spawn(StatusCode::OK).await;
        let client = server.client("abc123");
        let batch = TransactionBatch::from_input("tx1\n\ntx2\n").unwrap();

        client.submit(&batch).await.unwrap();

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].auth_token.as_deref(), Some("abc123"));
        assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(
            requests[0].body,
            serde_json::json!({ "transactions": ["tx1", "tx2"] })
        );
    }

    #[tokio::test]
    async fn non_ok_status_is_request_failed() {
        let server = test_server::spawn(StatusCode::UNAUTHORIZED).await;
        let client = server.client("wrong");
        let batch = TransactionBatch::from_input("tx1").unwrap();

        match client.submit(&batch).await {
            Err(ForwarderError::RequestFailed { status, .. }) => {
                assert_eq!(status, StatusCode::UNAUTHORIZED)
            }
            other => panic!("expected RequestFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn other_success_codes_are_still_failures() {
        let server = test_server::spawn(StatusCode::ACCEPTED).await;
        let client = server.client("t");
        let batch = TransactionBatch::from_input("tx1").unwrap();

        assert!(matches!(
            client.submit(&batch).await,
            Err(ForwarderError::RequestFailed { .. })
        ));
    }
}
