use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use pn_core::SummaryRequest;

use crate::AppState;

#[derive(Deserialize)]
pub struct NewsQuery {
    interests: Option<String>,
    q: Option<String>,
}

/// `GET /api/news?interests=<csv>` (or `?q=<combined query>`).
///
/// Either parameter is split on commas into trimmed interest tags; `q`
/// conventionally carries a single pre-combined boolean query, which the
/// planner's one-tag rule serves with a single request. A request with
/// neither parameter is malformed; a parameter that trims down to no
/// tags yields an empty article list.
pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NewsQuery>,
) -> impl IntoResponse {
    let Some(raw) = params.interests.or(params.q) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing interests or q parameter" })),
        );
    };

    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect();

    match state.aggregator.fetch(&tags).await {
        Ok(articles) => (StatusCode::OK, Json(json!({ "articles": articles }))),
        Err(err) => {
            error!(%err, "failed to aggregate news");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to process request" })),
            )
        }
    }
}

/// `POST /api/summarize` with `{ title, description, content? }`.
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummaryRequest>,
) -> impl IntoResponse {
    match state.pipeline.summarize(&req).await {
        Ok(summary) => (StatusCode::OK, Json(json!(summary))),
        Err(err) => {
            error!(title = %req.title, %err, "failed to generate summary");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to generate summary",
                    "details": err.to_string(),
                })),
            )
        }
    }
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
