use crate::types::rating::ScenarioName;
use crate::types::report::{CompareOutcome, Comparison, PayChange, ScenarioSummary, DISCLAIMER};

pub fn scenario(summary: &ScenarioSummary) -> String {
    let title = summary.name.title();
    let mut out = String::new();
    out.push_str(&format!("{title} ratings: {}\n", summary.ratings));
    out.push_str(&format!("{title} combined rating: {}\n", summary.combined));
    out.push_str(&format!(
        "{title} estimated monthly compensation: ${}\n",
        summary.monthly_compensation
    ));
    out.push_str(DISCLAIMER);
    out.push('\n');
    out
}

pub fn missing_scenario(name: ScenarioName) -> String {
    format!("No {} ratings have been entered yet.\n", name.label())
}

pub fn missing_for_comparison(name: ScenarioName) -> String {
    format!(
        "{} ratings not yet entered.\n",
        name.label().to_ascii_uppercase()
    )
}

pub fn comparison(outcome: &CompareOutcome) -> String {
    match outcome {
        CompareOutcome::Missing(name) => missing_for_comparison(*name),
        CompareOutcome::Ready(comparison) => ready_comparison(comparison),
    }
}

fn ready_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    out.push_str(&scenario(&comparison.current));
    out.push('\n');
    out.push_str(&scenario(&comparison.proposed));
    out.push('\n');
    out.push_str("=== Difference ===\n");
    out.push_str(&format!(
        "Change in combined rating: {} -> {}\n",
        comparison.current.combined, comparison.proposed.combined
    ));
    out.push_str(&format!(
        "Change in monthly pay: ${} -> ${}\n",
        comparison.current.monthly_compensation, comparison.proposed.monthly_compensation
    ));
    out.push_str(&pay_change_line(comparison.change));
    out.push('\n');
    out
}

pub fn pay_change_line(change: PayChange) -> String {
    match change {
        PayChange::Increase(amount) => format!("Estimated increase of ${amount} per month"),
        PayChange::Decrease(amount) => format!("Estimated decrease of ${amount} per month"),
        PayChange::NoChange => "No change in estimated monthly compensation.".to_string(),
    }
}
