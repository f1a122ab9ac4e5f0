// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfer Ops - Filecoin multisig gateway and transaction forwarder
//!
//! Two independent utilities share this crate:
//!
//! - `lock-balance-api` proposes `LockBalance` messages on a multisig through
//!   a Filecoin full node's JSON-RPC API.
//! - `script-transactions` reads transaction ids from stdin and posts them to
//!   the transfer API of the selected environment.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `multisig` - Filecoin multisig proposal building and submission
//! - `forwarder` - Script-transactions batch forwarding
//! - `config` - Environment configuration
//! - `telemetry` - Tracing subscriber setup

pub mod api;
pub mod config;
pub mod error;
pub mod forwarder;
pub mod models;
pub mod multisig;
pub mod state;
pub mod telemetry;
