//! Festiva Storefront - Public catalog site.
//!
//! This binary serves the balloon shop's read-only catalog on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON page payloads
//! - Embedded SQLite store for categories, products, blog, news, and colors
//! - Schema guard + one-time seed run at startup, strictly before serving
//!
//! Rendering, static assets, and mail delivery are external collaborators;
//! this process only fetches and transmits the data they consume.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use festiva_storefront::config::SiteConfig;
use festiva_storefront::db::{self, StoreHealth};
use festiva_storefront::routes;
use festiva_storefront::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = SiteConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "festiva_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Bootstrap the store: schema guard, create/recreate if needed, seed.
    // Must complete before the listener accepts anything.
    let bootstrap = db::prepare_store(&config.database_url)
        .await
        .expect("Failed to open store");

    match bootstrap.health {
        StoreHealth::Ok => tracing::info!(seeded = ?bootstrap.seeded, "Store ready"),
        StoreHealth::Degraded => tracing::error!(
            "Store bootstrap and recovery both failed; serving without guaranteed data"
        ),
    }

    // Build application state
    let state = AppState::new(config.clone(), bootstrap.pool, bootstrap.health);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the store.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies store connectivity and bootstrap health before returning OK.
/// Returns 503 Service Unavailable if the store is unreachable or was left
/// degraded by a failed recovery.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.store_health() == StoreHealth::Degraded {
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
