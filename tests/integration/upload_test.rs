//! Integration tests for batch upload with folder routing.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_upload_creates_destination_folder() {
    let app = TestApp::new().await;

    let response = app
        .upload("files", &[("feature-file-4k_hfr-304546.xml", b"<feature/>")])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["count"], 1);
    let expected = json!([{ "filename": "feature-file-4k_hfr-304546.xml", "folder": "304546" }]);
    assert_eq!(response.body["uploaded"], expected);
    assert_eq!(response.body["files"], expected);
    assert_eq!(response.body["errors"], json!([]));

    let stored = std::fs::read(app.share_path("304546/feature-file-4k_hfr-304546.xml")).unwrap();
    assert_eq!(stored, b"<feature/>");
}

#[tokio::test]
async fn test_upload_partial_batch() {
    let app = TestApp::new().await;

    let response = app
        .upload(
            "files",
            &[
                ("feature-file-4k_hfr-304546.xml", b"a"),
                ("readme.txt", b"b"),
                ("feature-file-4k_hfr_off-303045.xml", b"c"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["count"], 2);
    assert_eq!(response.body["uploaded"].as_array().unwrap().len(), 2);
    assert_eq!(
        response.body["errors"],
        json!([{ "filename": "readme.txt", "message": "Could not extract folder name" }])
    );
    assert!(app.share_path("303045/feature-file-4k_hfr_off-303045.xml").exists());
}

#[tokio::test]
async fn test_upload_sanitizes_filename() {
    let app = TestApp::new().await;

    let response = app.upload("files", &[("../../evil-77.txt", b"x")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["uploaded"][0]["filename"], "evil-77.txt");
    assert!(app.share_path("77/evil-77.txt").exists());
}

#[tokio::test]
async fn test_upload_without_files_field() {
    let app = TestApp::new().await;

    let response = app.upload("attachment", &[("a-1.txt", b"x")]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "No files provided");
}

#[tokio::test]
async fn test_upload_with_only_empty_filenames() {
    let app = TestApp::new().await;

    let response = app.upload("files", &[("", b"x")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["count"], 0);
}

#[tokio::test]
async fn test_upload_file_count_limit() {
    let app = TestApp::with_config(|config| {
        config.server.max_files_per_upload = 2;
    })
    .await;
    assert_eq!(app.config.server.max_files_per_upload, 2);

    let response = app
        .upload("files", &[("a-1.txt", b"1"), ("b-1.txt", b"2"), ("c-1.txt", b"3")])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!app.share_path("1").exists());
}

#[tokio::test]
async fn test_upload_requires_multipart() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/upload", Some(json!({ "files": [] })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION");
}
