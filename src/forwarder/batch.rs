// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction batches parsed from piped input.

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt};

use super::error::ForwarderError;

/// Ordered, non-empty list of transaction ids.
///
/// Serializes as the request body of the script-transactions endpoint:
/// `{"transactions": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionBatch {
    transactions: Vec<String>,
}

impl TransactionBatch {
    /// Build a batch from newline-separated input.
    ///
    /// Empty lines are dropped; every other line is kept as given, minus
    /// one trailing CR from CRLF input. Order and duplicates are kept.
    pub fn from_input(input: &str) -> Result<Self, ForwarderError> {
        let transactions: Vec<String> = input
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if transactions.is_empty() {
            return Err(ForwarderError::EmptyBatch);
        }

        Ok(Self { transactions })
    }

    pub fn transactions(&self) -> &[String] {
        &self.transactions
    }
}

/// Read `reader` to end-of-stream.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub async fn read_input<R: AsyncRead + Unpin>(mut reader: R) -> Result<String, ForwarderError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
