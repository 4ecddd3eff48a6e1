pub(crate) mod rules;

use super::dashboard::HealthDashboard;
use super::inputs::BusinessInputs;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort key: lower ranks come first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Area of the business a suggestion pulls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lever {
    Slo,
    Upsell,
    Annual,
    Downsell,
    Retention,
    Margin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub priority: Priority,
    pub lever: Lever,
    pub title: &'static str,
    pub description: String,
    pub expected_impact: String,
    pub implementation: Vec<&'static str>,
}

/// Runs every rule in declaration order and returns the hits, high priority first.
///
/// The sort is stable, so suggestions of equal priority keep their rule order.
pub fn suggest(inputs: &BusinessInputs, dashboard: &HealthDashboard) -> Vec<Suggestion> {
    apply_rules(&rules::RULES, inputs, dashboard)
}

pub(crate) fn apply_rules(
    rule_set: &[rules::SuggestionRule],
    inputs: &BusinessInputs,
    dashboard: &HealthDashboard,
) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = rule_set
        .iter()
        .filter_map(|rule| rule(inputs, dashboard))
        .collect();
    suggestions.sort_by_key(|suggestion| suggestion.priority.rank());
    suggestions
}
