/// Treasury history route
use axum::{extract::State, http::StatusCode, response::Response, routing::get, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    history::TransferEvent,
    logger::{self, LogTag},
    webserver::{
        state::AppState,
        utils::{error_response, method_not_allowed, success_response},
    },
};

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub transactions: Vec<TransferEvent>,
    pub cached: bool,
    pub skipped: usize,
}

/// GET only; HEAD is rejected like every other method
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/treasury-history",
        get(get_treasury_history)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}

/// GET /api/treasury-history
async fn get_treasury_history(State(state): State<Arc<AppState>>) -> Response {
    match state.history.resolve().await {
        Ok(report) => success_response(HistoryResponse {
            transactions: report.events,
            cached: report.cached,
            skipped: report.skipped,
        }),
        Err(e) => {
            logger::error(LogTag::History, &format!("History request failed: {}", e));
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch transaction history",
                &e.to_string(),
            )
        }
    }
}
