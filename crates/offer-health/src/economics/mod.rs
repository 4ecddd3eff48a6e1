//! Unit-economics health engine.
//!
//! One input snapshot flows through three pure stages: [`metrics::calculate`] derives the
//! ratios, [`dashboard::classify`] grades them, and [`suggestions::suggest`] maps the graded
//! dashboard to lever recommendations. [`report::evaluate`] runs all three.

pub mod dashboard;
pub mod format;
pub mod inputs;
pub mod memo;
pub mod metrics;
pub mod report;
pub mod router;
pub mod service;
pub mod snapshot;
pub mod suggestions;
pub mod views;

#[cfg(test)]
mod tests;

pub use dashboard::{classify, HealthDashboard, MetricKind, MetricResult, MetricStatus};
pub use inputs::{
    AnnualOption, BusinessInputs, DownsellOffer, LeverSet, SloOffer, UpsellLadder,
};
pub use memo::MemoizedEvaluator;
pub use metrics::{calculate, HealthMetrics};
pub use report::{evaluate, HealthReport};
pub use router::{economics_router, EvaluationResponse};
pub use service::EvaluationService;
pub use snapshot::{BusinessInputsSnapshot, SnapshotError};
pub use suggestions::{suggest, Lever, Priority, Suggestion};
pub use views::{AllClearNotice, HealthReportSummary, MetricCardView, StatusHeadline};
