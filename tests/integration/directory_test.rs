//! Integration tests for folder listing.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_directories_sorted() {
    let app = TestApp::new().await;
    app.mkdir("304546");
    app.mkdir("303045");
    app.mkdir("archive");
    app.write("stray.txt", b"x");

    let response = app.request("GET", "/api/directories", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "success": true, "directories": ["303045", "304546", "archive"] })
    );
}

#[tokio::test]
async fn test_list_directories_empty_base() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/directories", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["directories"], json!([]));
}

#[tokio::test]
async fn test_missing_base_path_is_server_error() {
    let app = TestApp::with_config(|config| {
        config.share.base_path = "Does/Not/Exist".to_string();
    })
    .await;

    let response = app.request("GET", "/api/directories", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["code"], "LISTING");
}
