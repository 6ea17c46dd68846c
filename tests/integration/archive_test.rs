//! Integration tests for bulk download archives.

use std::io::{Cursor, Read};

use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::json;
use zip::ZipArchive;

use crate::helpers::{RawResponse, TestApp};

async fn download_multiple(app: &TestApp, body: serde_json::Value) -> RawResponse {
    let request = Request::builder()
        .method("POST")
        .uri("/api/download-multiple")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.send(request).await
}

fn entries(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).unwrap();
            let mut content = Vec::new();
            entry.read_to_end(&mut content).unwrap();
            (entry.name().to_string(), content)
        })
        .collect()
}

#[tokio::test]
async fn test_archive_skips_missing_member() {
    let app = TestApp::new().await;
    app.mkdir("304546");
    app.write("304546/test1.txt", b"first");

    let response = download_multiple(
        &app,
        json!({ "files": ["test1.txt", "test2.txt"], "folder": "304546" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::CONTENT_TYPE], "application/zip");
    assert_eq!(
        response.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"smb-files-304546.zip\""
    );
    assert_eq!(
        entries(&response.body),
        vec![("test1.txt".to_string(), b"first".to_vec())]
    );
}

#[tokio::test]
async fn test_archive_of_base_folder_is_named_root() {
    let app = TestApp::new().await;
    app.write("a.txt", b"a");

    let response = download_multiple(&app, json!({ "files": ["a.txt"] })).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"smb-files-root.zip\""
    );
}

#[tokio::test]
async fn test_archive_requires_files() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/download-multiple",
            Some(json!({ "files": [], "folder": "304546" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "No files specified");
}
