// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request structures accepted by the lock-balance gateway. Field names follow
//! the gateway's PascalCase contract (`MultisigAddress`, `StartEpoch`, ...);
//! camelCase spellings are accepted as aliases.
//!
//! All fields arrive as strings and are validated by
//! [`LockBalanceProposal::from_request`](crate::multisig::LockBalanceProposal::from_request).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Lock Balance Models
// =============================================================================

/// Request to propose locking part of a multisig's balance.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct LockBalanceRequest {
    /// Multisig actor address (`f2...`, `t2...` or an ID address).
    #[serde(alias = "multisigAddress")]
    #[schema(example = "t01234")]
    pub multisig_address: String,
    /// Signer address submitting the proposal.
    #[serde(alias = "recipientAddress")]
    #[schema(example = "t01001")]
    pub recipient_address: String,
    /// Amount to lock, in FIL (e.g. `"1.5"`).
    #[serde(alias = "amount")]
    #[schema(example = "1.5")]
    pub amount: String,
    /// Epoch at which vesting starts.
    #[serde(alias = "startEpoch")]
    #[schema(example = "2500000")]
    pub start_epoch: String,
    /// Lock duration in months.
    #[serde(alias = "duration")]
    #[schema(example = "12")]
    pub duration: String,
}
