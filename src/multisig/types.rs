// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Multisig types and chain constants.

use std::str::FromStr;

use fvm_shared::{address::Address, clock::ChainEpoch, econ::TokenAmount};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Assumed block time of the chain.
pub const BLOCK_TIME_SECONDS: ChainEpoch = 30;

/// 2880 epochs.
pub const EPOCHS_PER_DAY: ChainEpoch = 24 * 60 * 60 / BLOCK_TIME_SECONDS;

/// 87600 epochs. Integer division, so a "month" is 365/12 days truncated.
pub const EPOCHS_PER_MONTH: ChainEpoch = EPOCHS_PER_DAY * 365 / 12;

/// Method number of `LockBalance` on the builtin multisig actor.
pub const LOCK_BALANCE_METHOD: u64 = 9;

/// Full node JSON-RPC method used to propose a multisig message.
pub const MSIG_PROPOSE_METHOD: &str = "Filecoin.MsigPropose";

const MAINNET_PREFIX: char = 'f';
const TESTNET_PREFIX: char = 't';

/// Number of epochs covered by `months` months, or `None` on overflow.
pub fn unlock_duration(months: ChainEpoch) -> Option<ChainEpoch> {
    months.checked_mul(EPOCHS_PER_MONTH)
}

/// A validated Filecoin address.
///
/// Keeps the caller's encoding so a testnet (`t...`) address is forwarded to
/// the node unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilAddress {
    address: Address,
    encoded: String,
}

impl FilAddress {
    /// Parse an address in either network's string encoding.
    pub fn parse(raw: &str) -> Result<Self, fvm_shared::address::Error> {
        let encoded = raw.trim();
        // The checksum does not cover the network prefix.
        let normalized = match encoded.strip_prefix(TESTNET_PREFIX) {
            Some(rest) => format!("{MAINNET_PREFIX}{rest}"),
            None => encoded.to_string(),
        };
        let address = Address::from_str(&normalized)?;

        Ok(Self {
            address,
            encoded: encoded.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl std::fmt::Display for FilAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl Serialize for FilAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded)
    }
}

/// Parameters of the multisig actor's `LockBalance` method.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalParameters {
    pub start_epoch: ChainEpoch,
    /// Lock duration in epochs.
    pub unlock_duration: ChainEpoch,
    pub amount: TokenAmount,
}

impl ProposalParameters {
    /// DAG-CBOR encoding expected by the actor: `[start_epoch, unlock_duration, amount]`.
    pub fn to_cbor(&self) -> Result<Vec<u8>, fvm_ipld_encoding::Error> {
        fvm_ipld_encoding::to_vec(&(self.start_epoch, self.unlock_duration, &self.amount))
    }
}

/// CID of a message pushed to the node's mpool.
///
/// Opaque to this service; serialized in the node's JSON form `{"/": "bafy..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageCid {
    #[serde(rename = "/")]
    #[schema(example = "bafy2bzacea3wsdh6y3a36tb3skempjoxqpuyompjbmfeyf34fi3uy6uue42v4")]
    pub root: String,
}

impl MessageCid {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }
}

impl std::fmt::Display for MessageCid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.root)
    }
}
