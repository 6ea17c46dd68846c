//! Integration tests for health checks, CORS, and the static home page.

use axum::body::Body;
use http::{Request, StatusCode, header};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_share_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health/share", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["provider"], "local");
    assert_eq!(response.body["reachable"], true);
}

#[tokio::test]
async fn test_share_health_with_bad_address() {
    let app = TestApp::with_config(|config| {
        config.share.root_address = "just-a-host".to_string();
    })
    .await;

    let response = app.request("GET", "/api/health/share", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["reachable"], false);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "http://example.test")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_static_home_page() {
    let app = TestApp::new().await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&response.body).contains("ShareGate"));
}
