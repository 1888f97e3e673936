//! End-to-end tests for the report API over an in-memory router.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use abaco_api::{AppState, create_router};
use abaco_core::report::ReportGenerator;
use abaco_core::storage::{ArtifactStore, StorageProvider};

fn test_router(dir: &tempfile::TempDir) -> Router {
    let store = ArtifactStore::from_provider(&StorageProvider::local_fs(dir.path()))
        .expect("local store should initialize");
    let generator = ReportGenerator::new(Arc::new(store), "img/dpa.png");
    let state = AppState {
        reports: Arc::new(generator),
    };
    create_router(state, dir.path().to_str().expect("utf-8 temp path"))
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/reports")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn written_reports(dir: &tempfile::TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("read_dir")
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("report_"))
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_generate_report_success() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_router(&dir);

    let body = r#"{
        "counts": [
            {"label": "PERNIL - Dianteiro", "value": 3},
            {"label": "PERNIL - Dianteiro", "value": 5},
            {"label": "PALETA - Traseiro", "value": 2}
        ],
        "responsible": "Maria"
    }"#;
    let response = app.oneshot(post_json(body)).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(payload["status"], "success");
    assert_eq!(payload["grand_total"], 10);
    let filename = payload["filename"].as_str().expect("filename");
    assert!(filename.starts_with("report_"));
    assert!(filename.ends_with(".pdf"));

    let pdf = std::fs::read(dir.path().join(filename)).expect("artifact on disk");
    assert!(pdf.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_empty_counts_still_generates_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_router(&dir);

    let response = app
        .oneshot(post_json(r#"{"counts": []}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(payload["grand_total"], 0);
    assert_eq!(written_reports(&dir).len(), 1);
}

#[tokio::test]
async fn test_malformed_value_fails_whole_request() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_router(&dir);

    let response = app
        .oneshot(post_json(
            r#"{"counts": [{"label": "PERNIL - Dianteiro", "value": "three"}]}"#,
        ))
        .await
        .expect("response");

    // Rejected at the deserialization boundary; no artifact is written.
    assert!(response.status().is_client_error());
    assert!(written_reports(&dir).is_empty());
}

#[tokio::test]
async fn test_missing_counts_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_router(&dir);

    let response = app
        .oneshot(post_json(r#"{"responsible": "Maria"}"#))
        .await
        .expect("response");

    assert!(response.status().is_client_error());
    assert!(written_reports(&dir).is_empty());
}

#[tokio::test]
async fn test_health_probe() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_router(&dir);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_responses_are_never_cacheable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_router(&dir);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok()),
        Some("no-store, no-cache, must-revalidate")
    );
}
