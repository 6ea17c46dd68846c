//! Shared test helpers for integration tests.

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use bytes::Bytes;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use sharegate_api::{AppState, build_router};
use sharegate_core::config::{AppConfig, ShareProviderKind};

const BOUNDARY: &str = "sharegate-test-boundary";

/// Test application backed by a temporary local share.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    dir: tempfile::TempDir,
}

/// Captured JSON response.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Captured raw response.
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application after adjusting the default test config
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.share.provider = ShareProviderKind::Local;
        config.share.root_address = "//nas.test.local/Ocean".to_string();
        config.share.base_path = "/Inbox/Features/".to_string();
        config.share.local_root = dir.path().join("shares").to_string_lossy().into_owned();
        config.server.static_dir = dir.path().join("public").to_string_lossy().into_owned();
        adjust(&mut config);

        std::fs::create_dir_all(dir.path().join("shares/Ocean/Inbox/Features"))
            .expect("Failed to create base path");
        std::fs::create_dir_all(dir.path().join("public")).expect("Failed to create public dir");
        std::fs::write(
            dir.path().join("public/index.html"),
            "<html><body>ShareGate</body></html>",
        )
        .expect("Failed to write index.html");

        let connector = sharegate_storage::connector_for(&config.share)
            .await
            .expect("Failed to init connector");
        let router = build_router(AppState::new(config.clone(), connector));

        Self {
            router,
            config,
            dir,
        }
    }

    /// Absolute local path of a base-relative path on the share
    pub fn share_path(&self, relative: &str) -> PathBuf {
        self.dir
            .path()
            .join("shares/Ocean/Inbox/Features")
            .join(relative)
    }

    /// Create a folder under the base path
    pub fn mkdir(&self, relative: &str) {
        std::fs::create_dir_all(self.share_path(relative)).expect("Failed to create folder");
    }

    /// Write a file under the base path
    pub fn write(&self, relative: &str, content: &[u8]) {
        std::fs::write(self.share_path(relative), content).expect("Failed to write file");
    }

    /// Send a request and capture the raw response
    pub async fn send(&self, request: Request<Body>) -> RawResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        RawResponse {
            status,
            headers,
            body,
        }
    }

    /// Make a request with an optional JSON body and parse a JSON response
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);

        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let raw = self.send(request).await;
        TestResponse {
            status: raw.status,
            body: serde_json::from_slice(&raw.body).unwrap_or(Value::Null),
        }
    }

    /// POST a multipart body with one `field` part per `(filename, content)`
    pub async fn upload(&self, field: &str, files: &[(&str, &[u8])]) -> TestResponse {
        let mut body = Vec::new();
        for (filename, content) in files {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
                     filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");

        let raw = self.send(request).await;
        TestResponse {
            status: raw.status,
            body: serde_json::from_slice(&raw.body).unwrap_or(Value::Null),
        }
    }
}
