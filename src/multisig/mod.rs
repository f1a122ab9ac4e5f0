// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Filecoin multisig integration.
//!
//! This module provides functionality for:
//! - Parsing FIL amounts and Filecoin addresses
//! - Deriving `LockBalance` parameters (start epoch, unlock duration, amount)
//! - Proposing the message on a multisig through a full node's JSON-RPC API

pub mod amount;
pub mod client;
pub mod proposal;
pub mod types;

pub use amount::{parse_fil, AmountError};
pub use client::{LotusClient, MultisigNode, ProposeCall};
pub use proposal::{parse_request, propose_lock_balance, LockBalanceProposal, ProposalError};
pub use types::*;
