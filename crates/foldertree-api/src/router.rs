//! Route definitions for the FolderTree HTTP API.
//!
//! Resource routes are mounted under `/api`; `/` answers a plain-text
//! liveness string. Handlers receive `AppState` through axum's `State`
//! extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with all routes and the request logging middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(file_routes())
        .merge(health_routes());

    Router::new()
        .route("/", get(handlers::health::root))
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Tree read and folder mutations
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::get_tree).post(handlers::folder::create_folder),
        )
        .route(
            "/folders/{id}",
            put(handlers::folder::rename_folder).delete(handlers::folder::delete_folder),
        )
}

/// File mutations
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", post(handlers::file::create_file))
        .route(
            "/files/{id}",
            put(handlers::file::rename_file).delete(handlers::file::delete_file),
        )
}

/// Health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
