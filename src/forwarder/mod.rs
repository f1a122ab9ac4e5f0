// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Script-transactions forwarder.
//!
//! Reads newline-separated transaction ids, wraps them as
//! `{"transactions": [...]}` and posts them once to the transfer API of the
//! selected [`Environment`].

pub mod batch;
pub mod client;
pub mod environment;
pub mod error;

#[cfg(test)]
pub(crate) mod test_server;

pub use batch::{read_input, TransactionBatch};
pub use client::ScriptTransactionsClient;
pub use environment::Environment;
pub use error::ForwarderError;

use tokio::io::AsyncRead;

/// Read all of `input`, then submit it as one batch.
///
/// Nothing is sent when the input holds no transactions.
pub async fn forward<R: AsyncRead + Unpin>(
    client: &ScriptTransactionsClient,
    input: R,
) -> Result<TransactionBatch, ForwarderError> {
    let raw = read_input(input).await?;
    let batch = TransactionBatch::from_input(&raw)?;
    client.submit(&batch).await?;
    Ok(batch)
}
