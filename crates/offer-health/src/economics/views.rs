use super::dashboard::{MetricKind, MetricStatus, StatusCounts};
use super::report::HealthReport;
use super::suggestions::Suggestion;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCardView {
    pub metric: MetricKind,
    pub label: &'static str,
    pub description: &'static str,
    pub formatted_value: String,
    pub target: &'static str,
    pub status: MetricStatus,
    pub status_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusHeadline {
    pub status: MetricStatus,
    pub message: &'static str,
}

impl StatusHeadline {
    pub const fn for_status(status: MetricStatus) -> Self {
        let message = match status {
            MetricStatus::Green => "Healthy Business - Ready to Scale",
            MetricStatus::Yellow => "Some Issues - Fix Before Scaling",
            MetricStatus::Red => "Critical Issues - Do Not Scale",
        };
        Self { status, message }
    }
}

/// Shown in place of the recommendation list when nothing needs fixing.
#[derive(Debug, Clone, Serialize)]
pub struct AllClearNotice {
    pub title: &'static str,
    pub message: &'static str,
}

impl AllClearNotice {
    pub const fn healthy() -> Self {
        Self {
            title: "Excellent Work!",
            message: "Your business metrics are healthy. Keep monitoring and maintain these \
                      strong fundamentals.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReportSummary {
    pub headline: StatusHeadline,
    pub status_counts: StatusCounts,
    pub cards: Vec<MetricCardView>,
    pub suggestions: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_clear: Option<AllClearNotice>,
}

pub(crate) fn summarize(report: &HealthReport) -> HealthReportSummary {
    let dashboard = &report.dashboard;

    let cards = dashboard
        .results()
        .into_iter()
        .map(|(kind, result)| MetricCardView {
            metric: kind,
            label: kind.label(),
            description: result.description,
            formatted_value: kind.format_value(result.value),
            target: result.target,
            status: result.status,
            status_label: result.status.label(),
        })
        .collect();

    let all_clear = report.is_all_clear().then(AllClearNotice::healthy);

    HealthReportSummary {
        headline: StatusHeadline::for_status(dashboard.overall_status),
        status_counts: dashboard.status_counts(),
        cards,
        suggestions: report.suggestions.clone(),
        all_clear,
    }
}
