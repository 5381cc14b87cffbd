use crate::infra::{AppState, RecommendationService};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use declutter::workflows::recommendation::{
    generate_reasoning, ActionType, Answers, LabelCatalog, Profile, RecommendationReport,
    RecommendationSettings,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Body shared by the preview and debug endpoints. `settings` lets an administrator try
/// draft settings before saving them; otherwise the stored settings apply.
#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    pub(crate) answers: Answers,
    #[serde(default)]
    pub(crate) profile: Option<Profile>,
    #[serde(default)]
    pub(crate) settings: Option<RecommendationSettings>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationResponse {
    pub(crate) recommendation: ActionType,
    pub(crate) label: &'static str,
    pub(crate) reasoning: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendationDetailResponse {
    #[serde(flatten)]
    pub(crate) report: RecommendationReport,
    pub(crate) label: &'static str,
    pub(crate) reasoning: String,
}

pub(crate) fn with_recommendation_routes(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_endpoint))
        .route(
            "/api/v1/recommendations/details",
            post(recommend_details_endpoint),
        )
        .route("/api/v1/recommendations/labels", get(labels_endpoint))
        .with_state(service)
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

pub(crate) async fn recommend_endpoint(
    State(service): State<Arc<RecommendationService>>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    let RecommendationRequest {
        answers,
        profile,
        settings,
    } = request;

    let settings = match settings {
        Some(settings) => settings,
        None => service.settings().await,
    };
    let recommendation = service
        .engine()
        .classify(&answers, profile.as_ref(), Some(&settings));

    Json(RecommendationResponse {
        recommendation,
        label: recommendation.label(),
        reasoning: generate_reasoning(recommendation, &answers, profile.as_ref()),
    })
}

pub(crate) async fn recommend_details_endpoint(
    State(service): State<Arc<RecommendationService>>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationDetailResponse> {
    let RecommendationRequest {
        answers,
        profile,
        settings,
    } = request;

    let settings = match settings {
        Some(settings) => settings,
        None => service.settings().await,
    };
    let report = service
        .engine()
        .classify_with_details(&answers, profile.as_ref(), Some(&settings));
    let reasoning = generate_reasoning(report.recommendation, &answers, profile.as_ref());

    Json(RecommendationDetailResponse {
        label: report.recommendation.label(),
        report,
        reasoning,
    })
}

pub(crate) async fn labels_endpoint() -> Json<LabelCatalog> {
    Json(LabelCatalog::build())
}
