use super::common::*;
use crate::economics::dashboard::classify;
use crate::economics::inputs::{BusinessInputs, LeverSet, UpsellLadder};
use crate::economics::metrics::calculate;
use crate::economics::suggestions::rules::RULES;
use crate::economics::suggestions::{apply_rules, suggest, Lever, Priority, Suggestion};

fn suggestions_for(inputs: &BusinessInputs) -> Vec<Suggestion> {
    let dashboard = classify(&calculate(inputs));
    suggest(inputs, &dashboard)
}

fn titles(suggestions: &[Suggestion]) -> Vec<&'static str> {
    suggestions.iter().map(|suggestion| suggestion.title).collect()
}

#[test]
fn baseline_snapshot_fires_no_rules() {
    // Churn is red but LTV:CAC is green, so the churn rule stays quiet.
    assert!(suggestions_for(&baseline()).is_empty());
}

#[test]
fn healthy_snapshot_with_every_lever_is_empty() {
    assert!(suggestions_for(&healthy_inputs()).is_empty());
}

#[test]
fn struggling_snapshot_fires_expected_rules_in_order() {
    let suggestions = suggestions_for(&struggling_inputs());

    assert_eq!(
        titles(&suggestions),
        vec![
            "Add High-Value Upsell",
            "Add Annual Prepay Option",
            "Fix Churn Crisis",
            "Add Self-Liquidating Offer (SLO)",
            "Add Downsell Recovery",
        ]
    );
    assert_eq!(
        suggestions
            .iter()
            .map(|suggestion| suggestion.lever)
            .collect::<Vec<_>>(),
        vec![
            Lever::Upsell,
            Lever::Annual,
            Lever::Retention,
            Lever::Slo,
            Lever::Downsell,
        ]
    );
}

#[test]
fn high_priority_sorts_before_medium_regardless_of_rule_order() {
    let inputs = struggling_inputs();
    let dashboard = classify(&calculate(&inputs));
    let mut reversed = RULES;
    reversed.reverse();

    let suggestions = apply_rules(&reversed, &inputs, &dashboard);

    assert_eq!(
        titles(&suggestions),
        vec![
            "Fix Churn Crisis",
            "Add Annual Prepay Option",
            "Add High-Value Upsell",
            "Add Downsell Recovery",
            "Add Self-Liquidating Offer (SLO)",
        ]
    );
    let first_medium = suggestions
        .iter()
        .position(|suggestion| suggestion.priority == Priority::Medium)
        .expect("medium suggestion present");
    assert!(suggestions[..first_medium]
        .iter()
        .all(|suggestion| suggestion.priority == Priority::High));
}

#[test]
fn payback_rules_embed_formatted_values() {
    let suggestions = suggestions_for(&struggling_inputs());

    assert_eq!(
        suggestions[0].expected_impact,
        "Could improve payback from 0.8× to ~2.2×"
    );
    assert_eq!(
        suggestions[1].expected_impact,
        "At 40% attach rate, could boost day-1 cash by $194 per customer"
    );
    assert_eq!(suggestions[0].implementation.len(), 3);
}

#[test]
fn embedded_values_round_ties_upward() {
    let inputs = BusinessInputs {
        day1_gross_profit_per_customer: 50.0,
        current_cac: 200.0,
        core_offer_price: 1.25,
        ..baseline()
    };
    let suggestions = suggestions_for(&inputs);

    let upsell = suggestions
        .iter()
        .find(|suggestion| suggestion.lever == Lever::Upsell)
        .expect("upsell rule fired");
    assert_eq!(
        upsell.expected_impact,
        "Could improve payback from 0.3× to ~2.2×"
    );

    let annual = suggestions
        .iter()
        .find(|suggestion| suggestion.lever == Lever::Annual)
        .expect("annual rule fired");
    assert_eq!(
        annual.expected_impact,
        "At 40% attach rate, could boost day-1 cash by $3 per customer"
    );
}

#[test]
fn infinite_churn_reads_as_infinity() {
    let inputs = BusinessInputs {
        monthly_churn_percent: f64::INFINITY,
        ..baseline()
    };
    let suggestions = suggestions_for(&inputs);
    let churn = suggestions
        .iter()
        .find(|suggestion| suggestion.lever == Lever::Retention)
        .expect("churn rule fired");

    assert!(churn.description.starts_with("Infinity% monthly churn"));
}

#[test]
fn churn_rule_embeds_raw_churn_value() {
    let suggestions = suggestions_for(&struggling_inputs());
    let churn = suggestions
        .iter()
        .find(|suggestion| suggestion.lever == Lever::Retention)
        .expect("churn rule fired");

    assert_eq!(
        churn.description,
        "12% monthly churn is killing your LTV. Focus on onboarding and early wins."
    );
    assert_eq!(churn.implementation.len(), 4);
}

#[test]
fn enabled_levers_suppress_their_rules() {
    let inputs = BusinessInputs {
        levers: LeverSet {
            upsells: Some(UpsellLadder::default()),
            slo: Some(Default::default()),
            ..LeverSet::default()
        },
        ..struggling_inputs()
    };

    let suggestions = suggestions_for(&inputs);

    assert_eq!(
        titles(&suggestions),
        vec![
            "Add Annual Prepay Option",
            "Fix Churn Crisis",
            "Add Downsell Recovery",
        ]
    );
}

#[test]
fn red_margin_fires_margin_rule() {
    let inputs = BusinessInputs {
        gross_margin_percent: 30.0,
        ..baseline()
    };

    let suggestions = suggestions_for(&inputs);

    assert_eq!(suggestions.len(), 1);
    let margin = &suggestions[0];
    assert_eq!(margin.priority, Priority::Medium);
    assert_eq!(margin.lever, Lever::Margin);
    assert_eq!(
        margin.description,
        "30% gross margin makes scaling difficult. Review COGS and pricing."
    );
}

#[test]
fn yellow_ltv_with_red_churn_fires_churn_rule() {
    // LTV 97 x 10 months = 970 against CAC 400 gives 2.425:1, which is yellow.
    let inputs = BusinessInputs {
        monthly_churn_percent: 10.0,
        current_cac: 400.0,
        day1_gross_profit_per_customer: 800.0,
        ..baseline()
    };

    let suggestions = suggestions_for(&inputs);

    assert_eq!(titles(&suggestions), vec!["Fix Churn Crisis"]);
}
