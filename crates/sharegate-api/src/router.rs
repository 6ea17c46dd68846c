//! Route definitions for the ShareGate HTTP API.
//!
//! All API routes are mounted under `/api`; everything else falls through to
//! the static home page directory.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = usize::try_from(state.config.server.max_upload_size_bytes).unwrap_or(usize::MAX);
    let cors = build_cors_layer(&state.config.server.cors);
    let static_files = ServeDir::new(&state.config.server.static_dir);

    let api_routes = Router::new()
        .merge(directory_routes())
        .merge(file_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Folder listing
fn directory_routes() -> Router<AppState> {
    Router::new().route("/directories", get(handlers::directory::list_directories))
}

/// File listing, upload, download, archive, delete
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(handlers::file::list_files))
        .route("/upload", post(handlers::file::upload_files))
        .route("/download/{filename}", get(handlers::file::download_file))
        .route("/download-multiple", post(handlers::file::download_multiple))
        .route("/delete/{filename}", delete(handlers::file::delete_file))
}

/// Liveness and share reachability
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/share", get(handlers::health::share_health))
}
