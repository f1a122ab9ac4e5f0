// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::config::NodeConfig;
use crate::multisig::LotusClient;

/// Shared, read-only state of the gateway.
#[derive(Clone)]
pub struct AppState {
    pub node: Arc<NodeConfig>,
}

impl AppState {
    pub fn new(node: NodeConfig) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// A client for one request; it connects only when a proposal is made.
    pub fn lotus_client(&self) -> LotusClient {
        LotusClient::new(self.node.as_ref().clone())
    }
}
