//! HTTP server for the calculator
//!
//! - GET  /           - Calculator page
//! - POST /calculate  - Evaluate one operation on two numbers
//! - GET  /health     - Health check

pub mod handlers;

use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;

/// Create the router with all endpoints
pub fn create_router(config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index_handler))
        .route(
            "/calculate",
            post(handlers::calculate_handler).layer(DefaultBodyLimit::max(config.max_body_bytes)),
        )
        .route("/health", get(handlers::health_handler))
        .fallback(handlers::not_found_handler)
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<()> {
    let app = create_router(&config);
    let addr = config.socket_addr();

    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("Calculator app running on {}", config.display_url());
    info!(%addr, max_body_bytes = config.max_body_bytes, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}
