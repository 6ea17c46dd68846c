//! Folder listing handler.

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/directories
pub async fn list_directories(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let directories = state.directory_service.list_directories().await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "directories": directories,
    })))
}
