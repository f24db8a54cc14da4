use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use mw_core::{MwError, PlainTextResult, TextStatistics};
use mw_text::{chunk_text, clean_for_ai, detect_changes, extract, normalize, text_statistics, Node};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

type ApiResult<T> = Result<Json<T>, ApiError>;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn text_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/text/extract", post(extract_text))
        .route("/api/v1/text/normalize", post(normalize_text))
        .route("/api/v1/text/chunk", post(chunk))
        .route("/api/v1/text/diff", post(diff))
        .route("/api/v1/text/stats", post(stats))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeRequest {
    pub text: String,
    #[serde(default)]
    pub for_ai: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkRequest {
    pub text: String,
    pub max_chunk_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRequest {
    pub old_text: String,
    pub new_text: String,
}

#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    pub text: String,
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(v)| v).map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::from(rejection)
    })
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptimeSecs": state.start_time.elapsed().as_secs(),
    }))
}

async fn extract_text(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<PlainTextResult> {
    let tree = Node::from_json(body(payload)?)?;
    Ok(Json(extract(&tree)))
}

async fn normalize_text(payload: Result<Json<NormalizeRequest>, JsonRejection>) -> ApiResult<Value> {
    let req = body(payload)?;
    let text = if req.for_ai { clean_for_ai(&req.text) } else { normalize(&req.text) };
    Ok(Json(json!({ "text": text })))
}

async fn chunk(
    State(state): State<AppState>,
    payload: Result<Json<ChunkRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let req = body(payload)?;
    let max_chunk_size = req.max_chunk_size.unwrap_or(state.config.text.max_chunk_size);
    if max_chunk_size == 0 {
        return Err(MwError::InvalidChunkSize(0).into());
    }
    let chunks = chunk_text(&req.text, max_chunk_size);
    debug!("Chunk request: {} bytes -> {} chunks", req.text.len(), chunks.len());
    Ok(Json(json!({ "chunks": chunks })))
}

async fn diff(payload: Result<Json<DiffRequest>, JsonRejection>) -> ApiResult<Value> {
    let req = body(payload)?;
    Ok(Json(json!({ "changes": detect_changes(&req.old_text, &req.new_text) })))
}

async fn stats(payload: Result<Json<StatsRequest>, JsonRejection>) -> ApiResult<TextStatistics> {
    let req = body(payload)?;
    Ok(Json(text_statistics(&req.text)))
}
