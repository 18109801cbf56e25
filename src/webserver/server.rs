/// Axum webserver implementation
///
/// Server lifecycle: bind, serve, graceful shutdown on [`shutdown`].
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::{
    config::WebserverConfig,
    logger::{self, LogTag},
    webserver::{middleware, routes, state::AppState},
};

/// Global shutdown notifier
static SHUTDOWN_NOTIFY: once_cell::sync::Lazy<Arc<Notify>> =
    once_cell::sync::Lazy::new(|| Arc::new(Notify::new()));

/// Start the webserver
///
/// This function blocks until the server is shut down
pub async fn start_server(config: &WebserverConfig, state: Arc<AppState>) -> Result<(), String> {
    let app = build_app(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("Invalid bind address: {}", e))?;

    let listener = TcpListener::bind(&addr).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::AddrInUse => {
            format!(
                "Failed to bind to {}: Address already in use\n\
                 \n\
                 Another treasury-api instance may be running, or pick a\n\
                 different port with --port.",
                addr
            )
        }
        std::io::ErrorKind::PermissionDenied => {
            format!(
                "Failed to bind to {}: Permission denied\n\
                 \n\
                 Port {} requires elevated privileges on this system.\n\
                 Consider using a port above 1024.",
                addr, config.port
            )
        }
        _ => format!("Failed to bind to {}: {}", addr, e),
    })?;

    logger::info(
        LogTag::Webserver,
        &format!("Listening on http://{} (/api/treasury, /api/treasury-history)", addr),
    );

    let shutdown_signal = async {
        SHUTDOWN_NOTIFY.notified().await;
        logger::debug(
            LogTag::Webserver,
            "Received shutdown signal, stopping webserver...",
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    logger::info(LogTag::Webserver, "Webserver stopped");

    Ok(())
}

/// Trigger webserver shutdown
pub fn shutdown() {
    logger::debug(LogTag::Webserver, "Triggering webserver shutdown...");
    SHUTDOWN_NOTIFY.notify_one();
}

/// Router plus request logging
pub fn build_app(state: Arc<AppState>) -> Router {
    routes::create_router(state).layer(axum::middleware::from_fn(middleware::log_request))
}
