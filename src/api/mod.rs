// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::ErrorBody, models::LockBalanceRequest, multisig::MessageCid, state::AppState,
};

pub mod health;
pub mod lock_balance;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/lock-balance", post(lock_balance::lock_balance))
        .with_state(state.clone());

    Router::new()
        // Gateway-style invocation posts straight to the root.
        .route("/", post(lock_balance::lock_balance))
        .route("/health/live", get(health::liveness))
        .with_state(state)
        .nest("/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(lock_balance::lock_balance, health::liveness),
    components(schemas(LockBalanceRequest, MessageCid, ErrorBody, health::HealthResponse)),
    tags(
        (name = "Multisig", description = "Multisig lock-balance proposals"),
        (name = "Health", description = "Liveness probe")
    )
)]
struct ApiDoc;
