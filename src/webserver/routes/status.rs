use axum::{extract::State, response::Response, routing::get, Router};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    cache::SnapshotCache,
    logger::{self, LogTag},
    webserver::{
        state::AppState,
        utils::{method_not_allowed, success_response},
    },
};

/// Simple health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
    pub uptime_seconds: u64,
    pub caches: CachesStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct CachesStatus {
    pub history: CacheStatus,
    pub balance: CacheStatus,
}

/// Counters of one response cache
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub ttl_secs: u64,
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub inserts: u64,
    pub hit_rate: f64,
}

impl CacheStatus {
    fn of<T: Clone>(cache: &SnapshotCache<T>) -> Self {
        let metrics = cache.metrics();
        Self {
            ttl_secs: cache.ttl().as_secs(),
            hits: metrics.hits,
            misses: metrics.misses,
            expirations: metrics.expirations,
            inserts: metrics.inserts,
            hit_rate: metrics.hit_rate(),
        }
    }
}

/// Create status routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check).fallback(method_not_allowed))
}

/// GET /api/health
async fn health_check(State(state): State<Arc<AppState>>) -> Response {
    logger::debug(LogTag::Webserver, "Health check endpoint called");

    success_response(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        caches: CachesStatus {
            history: CacheStatus::of(state.history.cache()),
            balance: CacheStatus::of(state.balance.cache()),
        },
    })
}
