use super::*;
use crate::downloader::test_helpers::{RecordingSource, create_test_downloader};
use axum::body::Body;
use axum::http::Request;
use std::time::Duration;
use tower::ServiceExt;


/// Helper to build a router over an instrumented downloader.
/// Returns the router, the source (for call counting), and the tempdir
/// (which must be kept alive).
fn create_test_router() -> (Router, Arc<RecordingSource>, tempfile::TempDir) {
    let source = RecordingSource::new(Duration::from_millis(5));
    let (downloader, temp_dir) = create_test_downloader(source.clone());
    let config = downloader.config.clone();
    let router = create_router(Arc::new(downloader), config);
    (router, source, temp_dir)
}

#[tokio::test]
async fn cors_headers_present_when_enabled() {
    let source = RecordingSource::new(Duration::ZERO);
    let (downloader, _temp_dir) = create_test_downloader(source);

    let mut config = (*downloader.config).clone();
    config.server.cors_enabled = true;
    config.server.cors_origins = vec!["*".to_string()];
    let config = Arc::new(config);

    let app = create_router(Arc::new(downloader), config);

    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin"),
        "CORS header should be present when CORS is enabled"
    );
}

#[tokio::test]
async fn cors_headers_absent_when_disabled() {
    let source = RecordingSource::new(Duration::ZERO);
    let (downloader, _temp_dir) = create_test_downloader(source);

    let mut config = (*downloader.config).clone();
    config.server.cors_enabled = false;
    let config = Arc::new(config);

    let app = create_router(Arc::new(downloader), config);

    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    assert!(
        !response
            .headers()
            .contains_key("access-control-allow-origin"),
        "CORS header should be absent when CORS is disabled"
    );
}

#[tokio::test]
async fn server_binds_and_answers_over_tcp() {
    let source = RecordingSource::new(Duration::ZERO);
    let (downloader, _temp_dir) = create_test_downloader(source);
    let config = downloader.config.clone();

    // Bind to a random available port
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = create_router(Arc::new(downloader), config);
    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    server_handle.abort();
}
