use crate::economics::inputs::{BusinessInputs, LeverSet, UpsellLadder};
use crate::economics::metrics::HealthMetrics;

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn baseline() -> BusinessInputs {
    BusinessInputs::baseline()
}

/// Payback, churn and cold conversion all red; LTV:CAC yellow; margin yellow.
pub(super) fn struggling_inputs() -> BusinessInputs {
    BusinessInputs {
        current_cac: 300.0,
        day1_gross_profit_per_customer: 250.0,
        monthly_churn_percent: 12.0,
        gross_margin_percent: 40.0,
        cold_traffic_conversion: 0.3,
        ..BusinessInputs::baseline()
    }
}

/// Every metric green and every lever switched on.
pub(super) fn healthy_inputs() -> BusinessInputs {
    BusinessInputs {
        monthly_churn_percent: 4.0,
        levers: LeverSet {
            upsells: Some(UpsellLadder::single(497.0, 20.0)),
            ..LeverSet::all_enabled()
        },
        ..BusinessInputs::baseline()
    }
}

/// Metrics where every headline value sits comfortably in the green band.
pub(super) fn green_metrics() -> HealthMetrics {
    HealthMetrics {
        thirty_day_payback: 2.5,
        ltv_cac_ratio: 4.0,
        gross_margin: 70.0,
        monthly_churn: 3.0,
        refund_rate: 4.0,
        cold_conversion: 2.0,
        current_ltv: 800.0,
        customers_from_spend: 100.0,
        average_lifetime_months: 33.3,
    }
}
