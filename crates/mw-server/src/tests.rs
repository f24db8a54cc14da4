use crate::*;
use axum::Router;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use mw_core::MedWriterConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(app(), "POST", uri, Some(body)).await
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_extract() {
    let tree = json!({
        "type": "element",
        "tag": "div",
        "children": [
            {"type": "element", "tag": "p", "children": [{"type": "text", "text": "Hello"}]},
            {"type": "element", "tag": "p", "children": [{"type": "text", "text": "World"}]}
        ]
    });
    let (status, body) = post("/api/v1/text/extract", tree).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plainText"], "Hello\nWorld");
    assert_eq!(body["wordCount"], 2);
    assert_eq!(body["positionMap"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_extract_malformed_tree() {
    let (status, body) = post("/api/v1/text/extract", json!({"type": "widget"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_normalize() {
    let (status, body) = post("/api/v1/text/normalize", json!({"text": "a\r\n\r\n\r\n\r\nb  c"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "a\n\nb c");

    let (_, body) = post("/api/v1/text/normalize", json!({"text": "x\u{00A0}\u{FB01}", "forAi": true})).await;
    assert_eq!(body["text"], "x fi");
}

#[tokio::test]
async fn test_chunk_with_explicit_size() {
    let text = "Dr. Smith saw the patient. BP was 120/80 mmHg. Patient reports mild headache.";
    let (status, body) = post("/api/v1/text/chunk", json!({"text": text, "maxChunkSize": 40})).await;
    assert_eq!(status, StatusCode::OK);
    let chunks = body["chunks"].as_array().unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0]["text"], "Dr. Smith saw the patient.");
    assert_eq!(chunks[2]["endOffset"], text.len());
}

#[tokio::test]
async fn test_chunk_uses_config_default() {
    let mut config = MedWriterConfig::default();
    config.text.max_chunk_size = 10;
    let app = app_with_state(state::AppState::new(config));
    let (status, body) = send(app, "POST", "/api/v1/text/chunk", Some(json!({"text": "First one. Second one."}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chunks"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_chunk_rejects_zero_size() {
    let (status, _) = post("/api/v1/text/chunk", json!({"text": "Hi.", "maxChunkSize": 0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chunk_rejects_wrong_types() {
    let (status, body) = post("/api/v1/text/chunk", json!({"text": 42})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_diff() {
    let (status, body) = post(
        "/api/v1/text/diff",
        json!({"oldText": "The patient has fever.", "newText": "The patient has high fever."}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let change = &body["changes"][0];
    assert_eq!(change["type"], "insert");
    assert_eq!(change["start"], 16);
    assert_eq!(change["newText"], "high ");
}

#[tokio::test]
async fn test_diff_identical() {
    let (_, body) = post("/api/v1/text/diff", json!({"oldText": "same", "newText": "same"})).await;
    assert!(body["changes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_stats() {
    let (status, body) = post("/api/v1/text/stats", json!({"text": "One two. Three!\n\nFour"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wordCount"], 4);
    assert_eq!(body["sentenceCount"], 3);
    assert_eq!(body["paragraphCount"], 2);
}

#[tokio::test]
async fn test_missing_body_rejected() {
    let (status, _) = send(app(), "POST", "/api/v1/text/stats", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
