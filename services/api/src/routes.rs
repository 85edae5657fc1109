use crate::infra::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use lead_scorer::error::AppError;
use lead_scorer::workflows::leads::{
    BatchError, BatchReport, IcpProfile, Lead, LeadBatch, LeadScorer, ScoreResult, SentimentProbe,
};
use serde_json::json;
use std::sync::Arc;

/// Scoring endpoints bound to one session scorer.
pub(crate) fn lead_router<P>(scorer: Arc<LeadScorer<P>>) -> Router
where
    P: SentimentProbe + 'static,
{
    Router::new()
        .route("/api/v1/icp", get(icp_endpoint::<P>))
        .route("/api/v1/leads/score", post(score_endpoint::<P>))
        .route("/api/v1/leads/batch", post(batch_endpoint::<P>))
        .route("/api/v1/leads/batch.csv", post(batch_csv_endpoint::<P>))
        .with_state(scorer)
}

pub(crate) fn with_lead_routes<P>(scorer: Arc<LeadScorer<P>>) -> Router
where
    P: SentimentProbe + 'static,
{
    lead_router(scorer)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn icp_endpoint<P>(State(scorer): State<Arc<LeadScorer<P>>>) -> Json<IcpProfile>
where
    P: SentimentProbe + 'static,
{
    Json(scorer.profile().clone())
}

pub(crate) async fn score_endpoint<P>(
    State(scorer): State<Arc<LeadScorer<P>>>,
    body: Bytes,
) -> Result<Json<ScoreResult>, AppError>
where
    P: SentimentProbe + 'static,
{
    let lead: Lead = serde_json::from_slice(&body).map_err(BatchError::from)?;
    Ok(Json(scorer.score(&lead).await))
}

pub(crate) async fn batch_endpoint<P>(
    State(scorer): State<Arc<LeadScorer<P>>>,
    body: Bytes,
) -> Result<Json<BatchReport>, AppError>
where
    P: SentimentProbe + 'static,
{
    let leads = LeadBatch::from_reader(body.as_ref())?;
    Ok(Json(scorer.score_batch(leads).await))
}

pub(crate) async fn batch_csv_endpoint<P>(
    State(scorer): State<Arc<LeadScorer<P>>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError>
where
    P: SentimentProbe + 'static,
{
    let leads = LeadBatch::from_reader(body.as_ref())?;
    let report = scorer.score_batch(leads).await;

    let mut csv = Vec::new();
    report.write_csv(&mut csv)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"lead_scoring_results.csv\"",
            ),
        ],
        csv,
    ))
}
