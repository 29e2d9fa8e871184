//! Application builder and server bootstrap.

use std::future::IntoFuture;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use foldertree_core::config::AppConfig;
use foldertree_core::error::{AppError, ErrorKind};
use foldertree_core::result::AppResult;
use foldertree_database::StoreManager;
use foldertree_database::migration::run_migrations;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the FolderTree server until a shutdown signal arrives.
///
/// Opens the configured store, applies migrations when the PostgreSQL
/// provider is active and `database.auto_migrate` is set, serves HTTP, and
/// closes the store on the way out. In-flight requests get
/// `server.shutdown_grace_seconds` to finish after the signal.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting FolderTree server v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Store ────────────────────────────────────────────
    let store = StoreManager::new(&config.database).await?;

    if let Some(pool) = store.pool() {
        if config.database.auto_migrate {
            run_migrations(pool.pool()).await?;
        }
    }

    // ── Step 2: Build app ────────────────────────────────────────
    let state = AppState::new(config.clone(), store.clone());
    let app = build_app(state);

    // ── Step 3: Bind and serve ───────────────────────────────────
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!(
        address = %addr,
        provider = store.provider_name(),
        "FolderTree server listening"
    );

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, draining connections...");
        let _ = shutdown_tx.send(true);
    });

    let result = tokio::select! {
        result = server.into_future() => result
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e)),
        _ = async {
            if shutdown_rx.wait_for(|stop| *stop).await.is_ok() {
                tokio::time::sleep(grace).await;
            } else {
                std::future::pending::<()>().await;
            }
        } => {
            warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, dropping open connections");
            Ok(())
        }
    };

    // ── Step 4: Release store ────────────────────────────────────
    store.close().await;
    info!("FolderTree server shut down");

    result
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
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
                error!(error = %e, "Failed to install SIGTERM handler");
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
}
