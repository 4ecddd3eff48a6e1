mod thresholds;

pub use thresholds::{overall_status, MetricStatus, StatusCounts, ThresholdRule};

use super::format::to_fixed;
use super::metrics::HealthMetrics;
use serde::Serialize;

/// The six non-negotiable metrics graded on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    ThirtyDayPayback,
    LtvCacRatio,
    GrossMargin,
    MonthlyChurn,
    RefundRate,
    ColdConversion,
}

impl MetricKind {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::ThirtyDayPayback,
            Self::LtvCacRatio,
            Self::GrossMargin,
            Self::MonthlyChurn,
            Self::RefundRate,
            Self::ColdConversion,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ThirtyDayPayback => "30-Day Payback",
            Self::LtvCacRatio => "LTV:CAC Ratio",
            Self::GrossMargin => "Gross Margin",
            Self::MonthlyChurn => "Monthly Churn",
            Self::RefundRate => "Refund Rate",
            Self::ColdConversion => "Cold Conversion",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ThirtyDayPayback => "30-Day Payback Multiple (GP ÷ CAC)",
            Self::LtvCacRatio => "Lifetime Value to CAC Ratio",
            Self::GrossMargin => "Gross Margin Percentage",
            Self::MonthlyChurn => "Monthly Churn Rate",
            Self::RefundRate => "Refund Rate",
            Self::ColdConversion => "Cold Traffic Conversion Rate",
        }
    }

    pub const fn target_label(self) -> &'static str {
        match self {
            Self::ThirtyDayPayback => "≥ 2.0×",
            Self::LtvCacRatio => "≥ 3:1",
            Self::GrossMargin => "≥ 50%",
            Self::MonthlyChurn => "≤ 5%",
            Self::RefundRate => "≤ 10%",
            Self::ColdConversion => "1-3%",
        }
    }

    /// One-line explanation of why the metric matters.
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::ThirtyDayPayback => {
                "Get back 2× your CAC + COGS in gross profit within 30 days"
            }
            Self::LtvCacRatio => {
                "Customer lifetime value should be at least 3× your customer acquisition cost"
            }
            Self::GrossMargin => "Maintain at least 50% gross margins for sustainable scaling",
            Self::MonthlyChurn => "Keep monthly churn below 5% for subscription businesses",
            Self::RefundRate => "Keep refunds below 10% to maintain healthy unit economics",
            Self::ColdConversion => "Convert 1-3% of cold traffic to first purchase",
        }
    }

    pub const fn rule(self) -> ThresholdRule {
        match self {
            Self::ThirtyDayPayback => ThresholdRule::AtLeast { target: 2.0 },
            Self::LtvCacRatio => ThresholdRule::AtLeast { target: 3.0 },
            Self::GrossMargin => ThresholdRule::AtLeast { target: 50.0 },
            Self::MonthlyChurn => ThresholdRule::AtMost { target: 5.0 },
            Self::RefundRate => ThresholdRule::AtMost { target: 10.0 },
            Self::ColdConversion => ThresholdRule::Band {
                healthy: (1.0, 3.0),
                tolerated: (0.5, 5.0),
            },
        }
    }

    pub fn value_in(self, metrics: &HealthMetrics) -> f64 {
        match self {
            Self::ThirtyDayPayback => metrics.thirty_day_payback,
            Self::LtvCacRatio => metrics.ltv_cac_ratio,
            Self::GrossMargin => metrics.gross_margin,
            Self::MonthlyChurn => metrics.monthly_churn,
            Self::RefundRate => metrics.refund_rate,
            Self::ColdConversion => metrics.cold_conversion,
        }
    }

    /// Display form used on metric cards.
    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::ThirtyDayPayback => format!("{}×", to_fixed(value, 1)),
            Self::LtvCacRatio => format!("{}:1", to_fixed(value, 1)),
            Self::GrossMargin | Self::MonthlyChurn | Self::RefundRate | Self::ColdConversion => {
                format!("{}%", to_fixed(value, 1))
            }
        }
    }

    fn grade(self, metrics: &HealthMetrics) -> MetricResult {
        let value = self.value_in(metrics);
        MetricResult {
            value,
            status: self.rule().classify(value),
            target: self.target_label(),
            description: self.description(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub value: f64,
    pub status: MetricStatus,
    pub target: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDashboard {
    pub thirty_day_payback: MetricResult,
    pub ltv_cac_ratio: MetricResult,
    pub gross_margin: MetricResult,
    pub monthly_churn: MetricResult,
    pub refund_rate: MetricResult,
    pub cold_conversion: MetricResult,
    pub overall_status: MetricStatus,
}

impl HealthDashboard {
    pub fn get(&self, kind: MetricKind) -> &MetricResult {
        match kind {
            MetricKind::ThirtyDayPayback => &self.thirty_day_payback,
            MetricKind::LtvCacRatio => &self.ltv_cac_ratio,
            MetricKind::GrossMargin => &self.gross_margin,
            MetricKind::MonthlyChurn => &self.monthly_churn,
            MetricKind::RefundRate => &self.refund_rate,
            MetricKind::ColdConversion => &self.cold_conversion,
        }
    }

    /// Results in dashboard order.
    pub fn results(&self) -> [(MetricKind, &MetricResult); 6] {
        MetricKind::ordered().map(|kind| (kind, self.get(kind)))
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(self.results().map(|(_, result)| result.status))
    }
}

pub fn classify(metrics: &HealthMetrics) -> HealthDashboard {
    let thirty_day_payback = MetricKind::ThirtyDayPayback.grade(metrics);
    let ltv_cac_ratio = MetricKind::LtvCacRatio.grade(metrics);
    let gross_margin = MetricKind::GrossMargin.grade(metrics);
    let monthly_churn = MetricKind::MonthlyChurn.grade(metrics);
    let refund_rate = MetricKind::RefundRate.grade(metrics);
    let cold_conversion = MetricKind::ColdConversion.grade(metrics);

    let overall_status = overall_status([
        thirty_day_payback.status,
        ltv_cac_ratio.status,
        gross_margin.status,
        monthly_churn.status,
        refund_rate.status,
        cold_conversion.status,
    ]);

    HealthDashboard {
        thirty_day_payback,
        ltv_cac_ratio,
        gross_margin,
        monthly_churn,
        refund_rate,
        cold_conversion,
        overall_status,
    }
}
