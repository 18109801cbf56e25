/// Treasury balance route
use axum::{extract::State, response::Response, routing::get, Router};
use std::sync::Arc;

use crate::webserver::{
    state::AppState,
    utils::{method_not_allowed, success_response},
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/treasury",
        get(get_treasury_balance)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}

/// GET /api/treasury
///
/// Lookups degrade per field, so this always answers 200.
async fn get_treasury_balance(State(state): State<Arc<AppState>>) -> Response {
    success_response(state.balance.resolve().await)
}
