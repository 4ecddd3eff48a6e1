use super::super::dashboard::{HealthDashboard, MetricStatus};
use super::super::format::{plain, to_fixed};
use super::super::inputs::BusinessInputs;
use super::{Lever, Priority, Suggestion};

pub(crate) type SuggestionRule = fn(&BusinessInputs, &HealthDashboard) -> Option<Suggestion>;

/// Evaluation order matters only for ties within a priority.
pub(crate) const RULES: [SuggestionRule; 6] = [
    add_upsell,
    add_annual_prepay,
    fix_churn,
    add_slo,
    add_downsell,
    improve_margin,
];

fn add_upsell(inputs: &BusinessInputs, dashboard: &HealthDashboard) -> Option<Suggestion> {
    if dashboard.thirty_day_payback.status != MetricStatus::Red || inputs.has_upsells() {
        return None;
    }

    Some(Suggestion {
        priority: Priority::High,
        lever: Lever::Upsell,
        title: "Add High-Value Upsell",
        description: "Your 30-day payback is below 2×. Adding a $497-997 upsell at 15-20% take \
                      rate could fix this immediately."
            .to_string(),
        expected_impact: format!(
            "Could improve payback from {}× to ~2.2×",
            to_fixed(dashboard.thirty_day_payback.value, 1)
        ),
        implementation: vec![
            "Create a complementary high-value offer (coaching, done-for-you, advanced training)",
            "Present immediately after core purchase",
            "Target 15-20% take rate with proper positioning",
        ],
    })
}

fn add_annual_prepay(inputs: &BusinessInputs, dashboard: &HealthDashboard) -> Option<Suggestion> {
    if dashboard.thirty_day_payback.status != MetricStatus::Red || inputs.has_annual_option() {
        return None;
    }

    Some(Suggestion {
        priority: Priority::High,
        lever: Lever::Annual,
        title: "Add Annual Prepay Option",
        description: "Annual prepay improves day-1 cash flow significantly. Offer 2 months free \
                      + bonus."
            .to_string(),
        expected_impact: format!(
            "At 40% attach rate, could boost day-1 cash by ${} per customer",
            to_fixed(inputs.core_offer_price * 2.0, 0)
        ),
        implementation: vec![
            "Price annual at 10-12 months instead of 12 (2 months free)",
            "Add exclusive annual-only bonuses",
            "Present at checkout with urgency",
        ],
    })
}

fn fix_churn(_inputs: &BusinessInputs, dashboard: &HealthDashboard) -> Option<Suggestion> {
    let ltv_at_risk = matches!(
        dashboard.ltv_cac_ratio.status,
        MetricStatus::Red | MetricStatus::Yellow
    );
    if !ltv_at_risk || dashboard.monthly_churn.status != MetricStatus::Red {
        return None;
    }

    Some(Suggestion {
        priority: Priority::High,
        lever: Lever::Retention,
        title: "Fix Churn Crisis",
        description: format!(
            "{}% monthly churn is killing your LTV. Focus on onboarding and early wins.",
            plain(dashboard.monthly_churn.value)
        ),
        expected_impact: "Reducing churn to 5% could double your LTV".to_string(),
        implementation: vec![
            "Implement 30-day onboarding sequence",
            "Create \"quick wins\" in first 7 days",
            "Add milestone rewards for staying 90+ days",
            "Survey churning customers to find friction points",
        ],
    })
}

fn add_slo(inputs: &BusinessInputs, dashboard: &HealthDashboard) -> Option<Suggestion> {
    if dashboard.cold_conversion.status != MetricStatus::Red || inputs.has_slo() {
        return None;
    }

    Some(Suggestion {
        priority: Priority::Medium,
        lever: Lever::Slo,
        title: "Add Self-Liquidating Offer (SLO)",
        description: "Low cold traffic conversion suggests price/value disconnect. A $47 \
                      tripwire can warm traffic."
            .to_string(),
        expected_impact: "Could improve overall conversion from cold traffic".to_string(),
        implementation: vec![
            "Create $47 starter pack or mini-course",
            "Use SLO buyers to warm traffic for main offer",
            "Target 15-25% SLO conversion rate",
        ],
    })
}

fn add_downsell(inputs: &BusinessInputs, dashboard: &HealthDashboard) -> Option<Suggestion> {
    if dashboard.cold_conversion.status != MetricStatus::Red || inputs.has_downsell() {
        return None;
    }

    Some(Suggestion {
        priority: Priority::Medium,
        lever: Lever::Downsell,
        title: "Add Downsell Recovery",
        description: "Recover some revenue from people who decline your main offer.".to_string(),
        expected_impact: "Could recover 8-12% of declines".to_string(),
        implementation: vec![
            "Create payment plan version of main offer",
            "Trigger on main offer decline",
            "Price slightly higher for payment convenience",
        ],
    })
}

fn improve_margin(_inputs: &BusinessInputs, dashboard: &HealthDashboard) -> Option<Suggestion> {
    if dashboard.gross_margin.status != MetricStatus::Red {
        return None;
    }

    Some(Suggestion {
        priority: Priority::Medium,
        lever: Lever::Margin,
        title: "Improve Unit Economics",
        description: format!(
            "{}% gross margin makes scaling difficult. Review COGS and pricing.",
            plain(dashboard.gross_margin.value)
        ),
        expected_impact: "Target 60%+ margins for healthy scaling".to_string(),
        implementation: vec![
            "Audit all delivery costs (COGS)",
            "Consider price increase with value stacking",
            "Automate or outsource expensive manual processes",
            "Bundle low-margin items with high-margin ones",
        ],
    })
}
