// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Building and submitting `LockBalance` multisig proposals.
//!
//! A proposal is validated and encoded entirely locally before the node is
//! contacted, so a malformed request never opens a connection.

use fvm_shared::{clock::ChainEpoch, econ::TokenAmount};
use tracing::info;

use super::amount::parse_fil;
use super::client::{MultisigNode, ProposeCall};
use super::types::{
    unlock_duration, FilAddress, MessageCid, ProposalParameters, LOCK_BALANCE_METHOD,
};
use crate::models::LockBalanceRequest;

/// A fully validated lock-balance proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct LockBalanceProposal {
    pub multisig: FilAddress,
    /// Signer submitting the proposal.
    pub proposer: FilAddress,
    pub params: ProposalParameters,
}

impl LockBalanceProposal {
    pub fn from_request(request: &LockBalanceRequest) -> Result<Self, ProposalError> {
        let amount = parse_fil(&request.amount)
            .map_err(|e| ProposalError::MalformedRequest(format!("Amount: {e}")))?;

        let multisig = FilAddress::parse(&request.multisig_address)
            .map_err(|e| ProposalError::InvalidAddress(format!("MultisigAddress: {e}")))?;
        let proposer = FilAddress::parse(&request.recipient_address)
            .map_err(|e| ProposalError::InvalidAddress(format!("RecipientAddress: {e}")))?;

        let start_epoch = parse_non_negative("StartEpoch", &request.start_epoch)?;
        let months = parse_non_negative("Duration", &request.duration)?;
        let unlock_duration = unlock_duration(months).ok_or_else(|| {
            ProposalError::MalformedRequest(format!("Duration: {months} months overflows"))
        })?;

        Ok(Self {
            multisig,
            proposer,
            params: ProposalParameters {
                start_epoch,
                unlock_duration,
                amount,
            },
        })
    }

    /// The `MsigPropose` call recording this proposal.
    ///
    /// The message targets the multisig itself with zero value.
    pub fn to_propose_call(&self) -> Result<ProposeCall, ProposalError> {
        let params = self
            .params
            .to_cbor()
            .map_err(|e| ProposalError::Serialization(e.to_string()))?;

        Ok(ProposeCall {
            multisig: self.multisig.clone(),
            to: self.multisig.clone(),
            value: TokenAmount::from_atto(0),
            from: self.proposer.clone(),
            method: LOCK_BALANCE_METHOD,
            params,
        })
    }
}

/// Parse a JSON request body.
pub fn parse_request(body: &[u8]) -> Result<LockBalanceRequest, ProposalError> {
    serde_json::from_slice(body).map_err(|e| ProposalError::MalformedRequest(e.to_string()))
}

/// Validate `request` and propose it on `node`.
pub async fn propose_lock_balance<N: MultisigNode>(
    node: &N,
    request: &LockBalanceRequest,
) -> Result<MessageCid, ProposalError> {
    let proposal = LockBalanceProposal::from_request(request)?;
    info!(
        multisig = %proposal.multisig,
        proposer = %proposal.proposer,
        start_epoch = proposal.params.start_epoch,
        unlock_duration = proposal.params.unlock_duration,
        amount = %proposal.params.amount.atto(),
        "Parsed lock balance request"
    );

    let call = proposal.to_propose_call()?;
    info!(params_len = call.params.len(), "Serialized lock balance params");

    node.msig_propose(&call).await
}

fn parse_non_negative(field: &str, raw: &str) -> Result<ChainEpoch, ProposalError> {
    let value = raw.trim().parse::<ChainEpoch>().map_err(|e| {
        ProposalError::MalformedRequest(format!("{field}: {raw:?} is not an integer ({e})"))
    })?;
    if value < 0 {
        return Err(ProposalError::MalformedRequest(format!(
            "{field}: must not be negative"
        )));
    }
    Ok(value)
}

/// Errors that can occur while proposing a lock balance.
#[derive(Debug, thiserror::Error)]
pub enum ProposalError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Connecting to full node failed: {0}")]
    Connection(String),

    #[error("Serializing params failed: {0}")]
    Serialization(String),

    #[error("Msig propose failed: {0}")]
    ProposeRpc(String),
}

impl ProposalError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ProposalError::MalformedRequest(_) => "malformed_request",
            ProposalError::InvalidAddress(_) => "invalid_address",
            ProposalError::Connection(_) => "connection_error",
            ProposalError::Serialization(_) => "serialization_error",
            ProposalError::ProposeRpc(_) => "propose_rpc_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use fvm_shared::bigint::BigInt;

    use crate::multisig::types::EPOCHS_PER_MONTH;

    /// In-memory node recording every call it receives.
    #[derive(Default)]
    struct RecordingNode {
        calls: Mutex<Vec<ProposeCall>>,
        rpc_error: Option<String>,
    }

    impl RecordingNode {
        fn failing(message: &str) -> Self {
            Self {
                rpc_error: Some(message.to_string()),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<ProposeCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MultisigNode for RecordingNode {
        async fn msig_propose(&self, call: &ProposeCall) -> Result<MessageCid, ProposalError> {
            self.calls.lock().unwrap().push(call.clone());
            match &self.rpc_error {
                Some(message) => Err(ProposalError::ProposeRpc(message.clone())),
                None => Ok(MessageCid::new("bafy2bzacedtest")),
            }
        }
    }

    fn request() -> LockBalanceRequest {
        LockBalanceRequest {
            multisig_address: "t01234".into(),
            recipient_address: "t01001".into(),
            amount: "1.5".into(),
            start_epoch: "100".into(),
            duration: "1".into(),
        }
    }

    #[test]
    fn derives_parameters_from_request() {
        let proposal = LockBalanceProposal::from_request(&request()).unwrap();

        assert_eq!(proposal.multisig.as_str(), "t01234");
        assert_eq!(proposal.proposer.as_str(), "t01001");
        assert_eq!(proposal.params.start_epoch, 100);
        assert_eq!(proposal.params.unlock_duration, 87600);
        assert_eq!(
            *proposal.params.amount.atto(),
            BigInt::from(1_500_000_000_000_000_000u64)
        );
    }

    #[test]
    fn unlock_duration_scales_with_months() {
        for months in [0i64, 1, 6, 24] {
            let mut req = request();
            req.duration = months.to_string();
            let proposal = LockBalanceProposal::from_request(&req).unwrap();
            assert_eq!(proposal.params.unlock_duration, months * EPOCHS_PER_MONTH);
        }
    }

    #[test]
    fn propose_call_targets_the_multisig_itself() {
        let proposal = LockBalanceProposal::from_request(&request()).unwrap();
        let call = proposal.to_propose_call().unwrap();

        assert_eq!(call.multisig, proposal.multisig);
        assert_eq!(call.to, proposal.multisig);
        assert_eq!(call.from, proposal.proposer);
        assert_eq!(*call.value.atto(), BigInt::from(0));
        assert_eq!(call.method, LOCK_BALANCE_METHOD);
        assert_eq!(call.params, proposal.params.to_cbor().unwrap());
    }

    #[test]
    fn non_integer_epochs_are_rejected() {
        let mut req = request();
        req.start_epoch = "soon".into();
        assert!(matches!(
            LockBalanceProposal::from_request(&req),
            Err(ProposalError::MalformedRequest(_))
        ));

        let mut req = request();
        req.duration = "-3".into();
        assert!(matches!(
            LockBalanceProposal::from_request(&req),
            Err(ProposalError::MalformedRequest(_))
        ));

        let mut req = request();
        req.duration = i64::MAX.to_string();
        assert!(matches!(
            LockBalanceProposal::from_request(&req),
            Err(ProposalError::MalformedRequest(_))
        ));
    }

    #[test]
    fn bad_address_is_invalid_address() {
        let mut req = request();
        req.recipient_address = "f1nope".into();
        let err = LockBalanceProposal::from_request(&req).unwrap_err();
        assert!(matches!(err, ProposalError::InvalidAddress(ref m) if m.starts_with("RecipientAddress")));
    }

    #[test]
    fn parse_request_reports_missing_fields() {
        let err = parse_request(br#"{"MultisigAddress":"t01234"}"#).unwrap_err();
        assert_eq!(err.error_code(), "malformed_request");

        let err = parse_request(b"not json").unwrap_err();
        assert_eq!(err.error_code(), "malformed_request");
    }

    #[tokio::test]
    async fn proposes_and_returns_cid() {
        let node = RecordingNode::default();
        let cid = propose_lock_balance(&node, &request()).await.unwrap();

        assert_eq!(cid, MessageCid::new("bafy2bzacedtest"));
        let calls = node.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, LOCK_BALANCE_METHOD);
    }

    #[tokio::test]
    async fn unparseable_amount_never_reaches_the_node() {
        let node = RecordingNode::default();
        let mut req = request();
        req.amount = "lots".into();

        let err = propose_lock_balance(&node, &req).await.unwrap_err();
        assert!(matches!(err, ProposalError::MalformedRequest(_)));
        assert!(node.calls().is_empty());
    }

    #[tokio::test]
    async fn remote_error_surfaces_as_propose_rpc_error() {
        let node = RecordingNode::failing("not enough funds");

        let err = propose_lock_balance(&node, &request()).await.unwrap_err();
        match err {
            ProposalError::ProposeRpc(msg) => assert_eq!(msg, "not enough funds"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(node.calls().len(), 1);
    }
}
