// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Loopback stand-in for the transfer API used by forwarder tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

use super::client::{ScriptTransactionsClient, SCRIPT_TRANSACTIONS_PATH};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub auth_token: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct ServerState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: StatusCode,
}

pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    pub fn client(&self, auth_token: &str) -> ScriptTransactionsClient {
        client(self.base_url.clone(), auth_token)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Forwarder client that ignores proxy settings of the test environment.
pub fn client(base_url: String, auth_token: &str) -> ScriptTransactionsClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    ScriptTransactionsClient::with_http_client(base_url, auth_token, http)
}

/// Serve the script-transactions route on an ephemeral port, answering `status`.
pub async fn spawn(status: StatusCode) -> TestServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        requests: requests.clone(),
        status,
    };

    let app = Router::new()
        .route(SCRIPT_TRANSACTIONS_PATH, post(record))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{addr}"),
        requests,
    }
}

async fn record(
    State(state): State<ServerState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.requests.lock().unwrap().push(RecordedRequest {
        auth_token: query.get("auth_token").cloned(),
        content_type,
        body,
    });
    state.status
}
