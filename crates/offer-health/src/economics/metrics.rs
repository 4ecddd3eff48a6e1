use super::inputs::BusinessInputs;
use serde::Serialize;

/// Headline ratios plus the supporting values they were derived from.
///
/// Ratios divide by `current_cac` without guarding, so a zero CAC yields infinities or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub thirty_day_payback: f64,
    pub ltv_cac_ratio: f64,
    pub gross_margin: f64,
    pub monthly_churn: f64,
    pub refund_rate: f64,
    pub cold_conversion: f64,
    #[serde(rename = "currentLTV")]
    pub current_ltv: f64,
    pub customers_from_spend: f64,
    pub average_lifetime_months: f64,
}

pub fn calculate(inputs: &BusinessInputs) -> HealthMetrics {
    let customers_from_spend = inputs.leads * (inputs.core_offer_conversion / 100.0);
    let average_lifetime_months = inputs
        .lifetime_override()
        .unwrap_or_else(|| 1.0 / (inputs.monthly_churn_percent / 100.0));

    let mut base_ltv = inputs.core_offer_price * average_lifetime_months;
    if let Some(ladder) = &inputs.levers.upsells {
        base_ltv += ladder.expected_value();
    }

    // SLO, annual and downsell levers are deliberately left out of LTV.
    let current_ltv = base_ltv;

    HealthMetrics {
        thirty_day_payback: inputs.day1_gross_profit_per_customer / inputs.current_cac,
        ltv_cac_ratio: current_ltv / inputs.current_cac,
        gross_margin: inputs.gross_margin_percent,
        monthly_churn: inputs.monthly_churn_percent,
        refund_rate: inputs.refund_rate_percent,
        cold_conversion: inputs.cold_traffic_conversion,
        current_ltv,
        customers_from_spend,
        average_lifetime_months,
    }
}
