use crate::webserver::state::AppState;
use axum::{
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod history;
pub mod status;
pub mod treasury;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(cors_layer())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(status::routes())
        .merge(treasury::routes())
        .merge(history::routes())
}

/// Public read-only endpoints: any origin, GET and preflight only
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::BalanceResolver;
    use crate::cache::SystemClock;
    use crate::history::{HistoryResolver, HistorySettings};
    use crate::prices::feed::testing::StaticFeed;
    use crate::rpc::testing::{transaction, FakeLedger};
    use crate::rpc::RpcError;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    const TREASURY: &str = "Treasury1111111111111111111111111111111111";

    fn app(ledger: FakeLedger) -> Router {
        app_with(Arc::new(ledger))
    }

    fn app_with(ledger: Arc<FakeLedger>) -> Router {
        let mut settings = HistorySettings::from(&crate::config::TreasuryConfig::default());
        settings.address = TREASURY.to_string();

        let history = Arc::new(HistoryResolver::new(
            ledger.clone(),
            settings,
            Duration::from_secs(60),
            Arc::new(SystemClock),
        ));
        let balance = Arc::new(BalanceResolver::new(
            ledger,
            Arc::new(StaticFeed::ok("coingecko", 100.0)),
            Arc::new(StaticFeed::failing("jupiter")),
            TREASURY,
            "Mint",
            Duration::from_secs(30),
            Arc::new(SystemClock),
        ));

        create_router(Arc::new(AppState::new(history, balance)))
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_history_get() {
        let ledger = FakeLedger::new().with_transaction(
            "sig1",
            transaction(
                Some(1_700_000_000),
                &["A", "B", TREASURY],
                &[0, 0, 5_000_000_000],
                &[0, 0, 4_000_000_000],
            ),
        );

        let response = app(ledger)
            .oneshot(request(Method::GET, "/api/treasury-history"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );

        let body = json_body(response).await;
        assert_eq!(body["cached"], Value::Bool(false));
        assert_eq!(body["skipped"], 0);

        let tx = &body["transactions"][0];
        assert_eq!(tx["signature"], "sig1");
        assert_eq!(tx["type"], "sol_transfer");
        assert_eq!(tx["direction"], "out");
        assert_eq!(tx["amount"], 1.0);
        assert_eq!(tx["amountFormatted"], "-1.0000 SOL");
        assert_eq!(tx["blockTime"], 1_700_000_000);
        assert_eq!(tx["url"], "https://solscan.io/tx/sig1");
    }

    #[tokio::test]
    async fn test_post_is_method_not_allowed() {
        for uri in ["/api/treasury-history", "/api/treasury"] {
            let response = app(FakeLedger::new())
                .oneshot(request(Method::POST, uri))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

            let body = json_body(response).await;
            assert_eq!(body, serde_json::json!({"error": "Method not allowed"}));
        }
    }

    #[tokio::test]
    async fn test_head_is_method_not_allowed() {
        let ledger = Arc::new(FakeLedger::new());

        for uri in ["/api/treasury-history", "/api/treasury"] {
            let response = app_with(ledger.clone())
                .oneshot(request(Method::HEAD, uri))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        }
        assert_eq!(ledger.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let response = app(FakeLedger::new())
            .oneshot(request(Method::OPTIONS, "/api/treasury-history"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        let methods = headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(methods.contains("GET"));
        assert!(methods.contains("OPTIONS"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_envelope() {
        let ledger = FakeLedger::new()
            .with_signature_list_error(RpcError::ConnectionFailed("node down".to_string()));

        let response = app(ledger)
            .oneshot(request(Method::GET, "/api/treasury-history"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert_eq!(body["error"], "Failed to fetch transaction history");
        assert!(body["message"].as_str().unwrap().contains("node down"));
    }

    #[tokio::test]
    async fn test_balance_get() {
        let ledger = FakeLedger::new().with_balances(Ok(2.0), Ok(50.0));

        let response = app(ledger)
            .oneshot(request(Method::GET, "/api/treasury"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["solBalance"], 2.0);
        assert_eq!(body["solPrice"], 100.0);
        assert_eq!(body["solValueUSD"], 200.0);
        assert_eq!(body["tokenBalance"], 50.0);
        assert_eq!(body["tokenPrice"], 0.0);
        assert_eq!(body["totalValue"], 200.0);
        assert_eq!(body["cached"], false);
        assert!(body.get("cacheAge").is_none());
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(FakeLedger::new())
            .oneshot(request(Method::GET, "/api/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_reports_cache_counters() {
        let router = app(FakeLedger::new());

        for _ in 0..2 {
            let response = router
                .clone()
                .oneshot(request(Method::GET, "/api/treasury-history"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = router
            .oneshot(request(Method::GET, "/api/health"))
            .await
            .unwrap();
        let body = json_body(response).await;

        let history = &body["caches"]["history"];
        assert_eq!(history["ttl_secs"], 60);
        assert_eq!(history["hits"], 1);
        assert_eq!(history["misses"], 1);
        assert_eq!(history["inserts"], 1);
        assert_eq!(history["hit_rate"], 0.5);

        let balance = &body["caches"]["balance"];
        assert_eq!(balance["ttl_secs"], 30);
        assert_eq!(balance["inserts"], 0);
    }
}
