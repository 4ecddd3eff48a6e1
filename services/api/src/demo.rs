use clap::Args;
use offer_health::economics::{
    evaluate, BusinessInputs, BusinessInputsSnapshot, EvaluationResponse, HealthReport,
};
use offer_health::error::AppError;
use std::fmt::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// JSON snapshot of the business inputs. Defaults to the baseline business.
    #[arg(long)]
    pub(crate) inputs: Option<PathBuf>,
    /// Print the full JSON report instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let inputs = match args.inputs {
        Some(path) => BusinessInputsSnapshot::from_path(path)?.into_inputs(),
        None => BusinessInputs::baseline(),
    };
    let report = evaluate(&inputs);

    if args.json {
        println!("{}", render_json(&inputs, report)?);
    } else {
        print!("{}", render_report("Unit economics health report", &report));
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Offer health demo");

    let baseline = evaluate(&BusinessInputs::baseline());
    print!("\n{}", render_report("Baseline business", &baseline));

    let struggling = evaluate(&struggling_business());
    print!("\n{}", render_report("Struggling business", &struggling));

    Ok(())
}

fn render_json(inputs: &BusinessInputs, report: HealthReport) -> Result<String, AppError> {
    serde_json::to_string_pretty(&evaluation_response(inputs, report)).map_err(AppError::Render)
}

fn evaluation_response(inputs: &BusinessInputs, report: HealthReport) -> EvaluationResponse {
    let summary = report.summary();
    EvaluationResponse {
        inputs: BusinessInputsSnapshot::from(inputs),
        metrics: report.metrics,
        dashboard: report.dashboard,
        suggestions: report.suggestions,
        summary,
    }
}

/// Thin day-1 profit, high churn and a weak cold funnel with no levers in place.
pub(crate) fn struggling_business() -> BusinessInputs {
    BusinessInputs {
        current_cac: 300.0,
        day1_gross_profit_per_customer: 250.0,
        monthly_churn_percent: 12.0,
        gross_margin_percent: 40.0,
        cold_traffic_conversion: 0.3,
        ..BusinessInputs::baseline()
    }
}

pub(crate) fn render_report(title: &str, report: &HealthReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, title, report);
    out
}

fn write_report(out: &mut impl Write, title: &str, report: &HealthReport) -> fmt::Result {
    let summary = report.summary();
    let counts = summary.status_counts;

    writeln!(out, "{title}")?;
    writeln!(
        out,
        "{} ({} green, {} yellow, {} red)",
        summary.headline.message, counts.green, counts.yellow, counts.red
    )?;

    writeln!(out, "\nMetrics")?;
    for card in &summary.cards {
        writeln!(
            out,
            "- {}: {} [{}] target {}",
            card.label, card.formatted_value, card.status_label, card.target
        )?;
    }

    if let Some(notice) = &summary.all_clear {
        writeln!(out, "\n{}", notice.title)?;
        return writeln!(out, "{}", notice.message);
    }

    writeln!(out, "\nRecommendations")?;
    for (index, suggestion) in summary.suggestions.iter().enumerate() {
        writeln!(
            out,
            "{}. [{}] {}",
            index + 1,
            suggestion.priority.label(),
            suggestion.title
        )?;
        writeln!(out, "   {}", suggestion.description)?;
        writeln!(out, "   Impact: {}", suggestion.expected_impact)?;
        for step in &suggestion.implementation {
            writeln!(out, "   - {step}")?;
        }
    }

    Ok(())
}
