use super::dashboard::{classify, HealthDashboard};
use super::inputs::BusinessInputs;
use super::metrics::{calculate, HealthMetrics};
use super::suggestions::{suggest, Suggestion};
use super::views::{self, HealthReportSummary};
use serde::Serialize;
use tracing::debug;

/// Everything derived from one input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub metrics: HealthMetrics,
    pub dashboard: HealthDashboard,
    pub suggestions: Vec<Suggestion>,
}

impl HealthReport {
    pub fn summary(&self) -> HealthReportSummary {
        views::summarize(self)
    }

    /// True when no rule fired; callers show the all-clear notice instead of a list.
    pub fn is_all_clear(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Calculate, classify, then suggest.
pub fn evaluate(inputs: &BusinessInputs) -> HealthReport {
    let metrics = calculate(inputs);
    let dashboard = classify(&metrics);
    let suggestions = suggest(inputs, &dashboard);

    debug!(
        overall = dashboard.overall_status.label(),
        suggestions = suggestions.len(),
        "unit economics evaluated"
    );

    HealthReport {
        metrics,
        dashboard,
        suggestions,
    }
}
