// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Forwarder errors.

use reqwest::StatusCode;

/// Errors that end a forwarding run.
#[derive(Debug, thiserror::Error)]
pub enum ForwarderError {
    #[error("environment not found: {0:?} (expected dev, staging or production)")]
    UnknownEnvironment(String),

    #[error("there are no transactions to send")]
    EmptyBatch,

    #[error("error reading piped input: {0}")]
    Input(#[from] std::io::Error),

    #[error("error building HTTP client: {0}")]
    Client(String),

    #[error("error posting transactions: {0}")]
    Transport(String),

    #[error("request failed with status: {status}")]
    RequestFailed { status: StatusCode, body: String },
}
