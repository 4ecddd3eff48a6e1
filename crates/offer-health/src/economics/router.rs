use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use crate::error::AppError;

use super::dashboard::HealthDashboard;
use super::inputs::BusinessInputs;
use super::metrics::HealthMetrics;
use super::service::EvaluationService;
use super::snapshot::BusinessInputsSnapshot;
use super::suggestions::Suggestion;
use super::views::HealthReportSummary;

/// Router builder exposing the calculator over HTTP.
pub fn economics_router(service: Arc<EvaluationService>) -> Router {
    Router::new()
        .route("/api/v1/unit-economics/evaluate", post(evaluate_handler))
        .route("/api/v1/unit-economics/baseline", get(baseline_handler))
        .with_state(service)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    /// Inputs as the calculator saw them, after coercion and lever stripping.
    pub inputs: BusinessInputsSnapshot,
    pub metrics: HealthMetrics,
    pub dashboard: HealthDashboard,
    pub suggestions: Vec<Suggestion>,
    pub summary: HealthReportSummary,
}

/// Parses the body itself so malformed snapshots get the `{"error": …}` payload.
pub(crate) async fn evaluate_handler(
    State(service): State<Arc<EvaluationService>>,
    body: Bytes,
) -> Result<Json<EvaluationResponse>, AppError> {
    let inputs = BusinessInputsSnapshot::from_reader(body.as_ref())?.into_inputs();
    let report = service.evaluate(&inputs);
    let summary = report.summary();

    info!(
        overall = report.dashboard.overall_status.label(),
        suggestions = report.suggestions.len(),
        "evaluation request served"
    );

    Ok(Json(EvaluationResponse {
        inputs: BusinessInputsSnapshot::from(&inputs),
        metrics: report.metrics,
        dashboard: report.dashboard,
        suggestions: report.suggestions,
        summary,
    }))
}

pub(crate) async fn baseline_handler() -> Json<BusinessInputsSnapshot> {
    Json(BusinessInputsSnapshot::from(&BusinessInputs::baseline()))
}
