use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use drugbank::service::{AppState, router};
use tower::ServiceExt;

use crate::helpers::fixtures::PATHWAY_PAIR;
use crate::helpers::write_fixture;

async fn post(state: AppState, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/drug_count")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_known_drug_returns_count() {
    let (_dir, path) = write_fixture(PATHWAY_PAIR, "drugbank.xml");
    let (status, body) = post(AppState::new(path, None), r#"{"drug": "DrugA"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"drug": "DrugA", "pathway_count": 2}));
}

#[tokio::test]
async fn test_unknown_drug_is_404() {
    let (_dir, path) = write_fixture(PATHWAY_PAIR, "drugbank.xml");
    let (status, body) = post(AppState::new(path, None), r#"{"drug": "Nothing"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Drug not found");
}

#[tokio::test]
async fn test_missing_export_is_500() {
    let dir = tempfile::TempDir::new().unwrap();
    let state = AppState::new(dir.path().join("absent.xml"), None);
    let (status, body) = post(state, r#"{"drug": "DrugA"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("IO error"));
}
