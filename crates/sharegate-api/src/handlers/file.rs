//! File listing, upload, download, archive, and delete handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;

use sharegate_core::error::AppError;
use sharegate_service::UploadFile;

use crate::dto::request::{DownloadMultipleRequest, FolderQuery};
use crate::dto::response::FileEntryResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Multipart field carrying upload parts.
const FILES_FIELD: &str = "files";

/// Unwrap `?folder=`, turning a malformed query into a validation error.
fn folder_query(
    query: Result<Query<FolderQuery>, QueryRejection>,
) -> Result<FolderQuery, AppError> {
    query
        .map(|Query(query)| query)
        .map_err(|e| AppError::validation(format!("Invalid query string: {e}")))
}

/// GET /api/files?folder=...
pub async fn list_files(
    State(state): State<AppState>,
    query: Result<Query<FolderQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let query = folder_query(query)?;
    let files: Vec<FileEntryResponse> = state
        .file_service
        .list_files(&query.folder)
        .await?
        .into_iter()
        .map(FileEntryResponse::from)
        .collect();

    Ok(Json(serde_json::json!({
        "success": true,
        "files": files,
        "folder": query.folder,
    })))
}

/// POST /api/upload (multipart, one part per file under `files`)
pub async fn upload_files(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut multipart =
        multipart.map_err(|e| AppError::validation(format!("Expected a multipart body: {e}")))?;
    let max_files = state.config.server.max_files_per_upload;

    let mut files = Vec::new();
    let mut saw_files_field = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        saw_files_field = true;

        if files.len() >= max_files {
            return Err(AppError::validation(format!(
                "Too many files: at most {max_files} per upload"
            ))
            .into());
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
        files.push(UploadFile { filename, content });
    }

    if !saw_files_field {
        return Err(AppError::validation("No files provided").into());
    }

    let outcome = state.file_service.upload_files(files).await?;

    Ok(Json(serde_json::json!({
        "success": outcome.is_success(),
        "files": outcome.uploaded,
        "uploaded": outcome.uploaded,
        "errors": outcome.errors,
        "count": outcome.succeeded_count,
    })))
}

/// GET /api/download/{filename}?folder=...
pub async fn download_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    query: Result<Query<FolderQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let query = folder_query(query)?;
    let data = state
        .file_service
        .download_file(&filename, &query.folder)
        .await?;

    attachment(data, "application/octet-stream", &filename)
}

/// POST /api/download-multiple (JSON `{files, folder}`), responds with a ZIP
pub async fn download_multiple(
    State(state): State<AppState>,
    body: Result<Json<DownloadMultipleRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) =
        body.map_err(|e| AppError::validation(format!("Invalid request body: {e}")))?;

    if request.files.is_empty() {
        return Err(AppError::validation("No files specified").into());
    }

    let archive = state
        .archive_builder
        .build_archive(&request.files, &request.folder)
        .await?;

    attachment(archive.bytes, "application/zip", &archive.file_name)
}

/// DELETE /api/delete/{filename}?folder=...
pub async fn delete_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    query: Result<Query<FolderQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let query = folder_query(query)?;
    state
        .file_service
        .delete_file(&filename, &query.folder)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": format!("File {filename} deleted successfully"),
    })))
}

/// Binary attachment response.
fn attachment(data: Bytes, content_type: &str, filename: &str) -> Result<Response, ApiError> {
    let quoted: String = filename
        .chars()
        .filter(|c| *c != '"' && !c.is_control())
        .collect();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{quoted}\""),
        )
        .header(header::CONTENT_LENGTH, data.len())
        .body(Body::from(data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")).into())
}
