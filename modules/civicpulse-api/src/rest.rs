use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::warn;

use civicpulse_common::{CivicPulseError, ClassifiedRecord, WeightPolicy};
use civicpulse_core::{prioritize, score};

use crate::AppState;

// --- Request bodies ---

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    query: String,
    #[serde(default)]
    weights: Option<WeightPolicy>,
}

#[derive(Deserialize)]
pub struct PrioritizeRequest {
    records: Vec<ClassifiedRecord>,
    #[serde(default)]
    weights: Option<WeightPolicy>,
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    text: String,
}

// --- Helpers ---

fn error_response(err: CivicPulseError) -> axum::response::Response {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        warn!(error = %err, "Pipeline failure");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

// --- Handlers ---

/// Full cycle: harvest → classify → prioritize → report.
pub async fn api_analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    if req.query.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "query cannot be empty" })),
        )
            .into_response();
    }

    let weights = req.weights.unwrap_or_default();
    match state.pipeline.analyze(&req.query, &weights).await {
        Ok(report) => Json(report).into_response(),
        Err(err) => error_response(err),
    }
}

/// Core-only path: rank already-classified records. No collaborators touched.
pub async fn api_prioritize(Json(req): Json<PrioritizeRequest>) -> impl IntoResponse {
    let weights = req.weights.unwrap_or_default();
    match prioritize(&req.records, &weights) {
        Ok(ranked) => Json(ranked).into_response(),
        Err(err) => error_response(err),
    }
}

/// Sentiment scoring for one snippet.
pub async fn api_score(Json(req): Json<ScoreRequest>) -> impl IntoResponse {
    Json(score(&req.text)).into_response()
}
