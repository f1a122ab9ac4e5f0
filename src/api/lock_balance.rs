// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Lock-balance proposal endpoint.

use axum::{body::Bytes, extract::State, Json};
use tracing::{info, warn};

use crate::{
    error::{ApiError, ErrorBody},
    models::LockBalanceRequest,
    multisig::{parse_request, propose_lock_balance, MessageCid},
    state::AppState,
};

/// Propose a `LockBalance` message on a multisig.
///
/// The body is read raw so that missing fields and bad JSON are reported as
/// `malformed_request` like every other validation failure.
#[utoipa::path(
    post,
    path = "/v1/lock-balance",
    request_body = LockBalanceRequest,
    tag = "Multisig",
    responses(
        (status = 200, description = "Proposal message CID", body = MessageCid),
        (status = 400, description = "Malformed request or invalid address", body = ErrorBody),
        (status = 500, description = "Params could not be serialized", body = ErrorBody),
        (status = 502, description = "Full node unreachable or propose failed", body = ErrorBody)
    )
)]
pub async fn lock_balance(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageCid>, ApiError> {
    let request = parse_request(&body)?;
    let client = state.lotus_client();

    match propose_lock_balance(&client, &request).await {
        Ok(cid) => {
            info!(cid = %cid, multisig = %request.multisig_address, "Lock balance proposed");
            Ok(Json(cid))
        }
        Err(e) => {
            warn!(
                error = %e,
                error_code = e.error_code(),
                multisig = %request.multisig_address,
                "Lock balance proposal failed"
            );
            Err(e.into())
        }
    }
}
