//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{HealthResponse, ShareHealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health/share
pub async fn share_health(State(state): State<AppState>) -> (StatusCode, Json<ShareHealthResponse>) {
    let provider = state.directory_service.provider().to_string();

    match state.directory_service.probe_share().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ShareHealthResponse {
                success: true,
                provider,
                reachable: true,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(kind = %e.kind, error = %e.message, "Share probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ShareHealthResponse {
                    success: false,
                    provider,
                    reachable: false,
                    error: Some(e.message),
                }),
            )
        }
    }
}
