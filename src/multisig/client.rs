// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Filecoin full node client for multisig proposals.

use std::future::Future;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use fvm_shared::econ::TokenAmount;
use jsonrpsee::{
    core::client::ClientT,
    rpc_params,
    ws_client::{HeaderMap, HeaderValue, WsClient, WsClientBuilder},
};
use tracing::info;

use super::proposal::ProposalError;
use super::types::{FilAddress, MessageCid, MSIG_PROPOSE_METHOD};
use crate::config::NodeConfig;

/// Arguments of a `MsigPropose` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposeCall {
    /// Multisig actor the proposal is recorded on.
    pub multisig: FilAddress,
    /// Destination of the proposed message.
    pub to: FilAddress,
    pub value: TokenAmount,
    /// Signer proposing the message.
    pub from: FilAddress,
    pub method: u64,
    /// CBOR-encoded method params.
    pub params: Vec<u8>,
}

/// A node able to record multisig proposals.
pub trait MultisigNode {
    fn msig_propose(
        &self,
        call: &ProposeCall,
    ) -> impl Future<Output = Result<MessageCid, ProposalError>> + Send;
}

/// JSON-RPC client for a Lotus-compatible full node.
///
/// Holds only connection parameters. Every proposal opens its own WebSocket
/// and the socket is closed when the call returns, whatever the outcome.
#[derive(Debug, Clone)]
pub struct LotusClient {
    config: NodeConfig,
}

impl LotusClient {
    pub fn new(config: NodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    async fn connect(&self) -> Result<WsClient, ProposalError> {
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.config.auth_token))
            .map_err(|e| ProposalError::Connection(format!("invalid auth token: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", bearer);

        WsClientBuilder::default()
            .set_headers(headers)
            .connection_timeout(self.config.timeout)
            .request_timeout(self.config.timeout)
            .build(&self.config.rpc_url)
            .await
            .map_err(|e| ProposalError::Connection(e.to_string()))
    }
}

impl MultisigNode for LotusClient {
    async fn msig_propose(&self, call: &ProposeCall) -> Result<MessageCid, ProposalError> {
        info!(rpc_url = %self.config.rpc_url, "Connecting to full node");
        let client = self.connect().await?;

        let params = rpc_params![
            call.multisig.as_str(),
            call.to.as_str(),
            call.value.atto().to_string(),
            call.from.as_str(),
            call.method,
            STANDARD.encode(&call.params)
        ];

        info!(multisig = %call.multisig, method = call.method, "Calling msig propose");
        let cid: MessageCid = client
            .request(MSIG_PROPOSE_METHOD, params)
            .await
            .map_err(|e| ProposalError::ProposeRpc(e.to_string()))?;

        info!(cid = %cid, "Msig proposal created");
        Ok(cid)
    }
}
