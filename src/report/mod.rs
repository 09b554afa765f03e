pub mod json;
pub mod text;

use crate::combine::combine;
use crate::error::Result;
use crate::table::lookup;
use crate::types::rating::{RatingList, ScenarioName};
use crate::types::report::{CompareOutcome, Comparison, PayChange, ScenarioSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Computes combined rating and pay, or `None` when nothing has been entered.
pub fn summarize(name: ScenarioName, ratings: &RatingList) -> Option<ScenarioSummary> {
    if ratings.is_empty() {
        return None;
    }
    let combined = combine(ratings.as_slice());
    let monthly_compensation = lookup(combined);
    tracing::debug!(
        scenario = name.label(),
        combined = combined.percent(),
        monthly_compensation,
        "scenario summarized"
    );
    Some(ScenarioSummary {
        name,
        ratings: ratings.clone(),
        combined,
        monthly_compensation,
    })
}

/// Current is checked first; proposed is not evaluated when current is missing.
pub fn compare(current: Option<&RatingList>, proposed: Option<&RatingList>) -> CompareOutcome {
    let Some(current) = current.and_then(|ratings| summarize(ScenarioName::Current, ratings))
    else {
        return CompareOutcome::Missing(ScenarioName::Current);
    };
    let Some(proposed) = proposed.and_then(|ratings| summarize(ScenarioName::Proposed, ratings))
    else {
        return CompareOutcome::Missing(ScenarioName::Proposed);
    };

    let change = PayChange::between(current.monthly_compensation, proposed.monthly_compensation);
    CompareOutcome::Ready(Box::new(Comparison {
        current,
        proposed,
        change,
    }))
}

pub fn render_scenario(
    name: ScenarioName,
    ratings: &RatingList,
    format: OutputFormat,
) -> Result<String> {
    let summary = summarize(name, ratings);
    match format {
        OutputFormat::Text => Ok(match &summary {
            Some(summary) => text::scenario(summary),
            None => text::missing_scenario(name),
        }),
        OutputFormat::Json => json::scenario(name, summary.as_ref()),
    }
}

pub fn render_comparison(outcome: &CompareOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::comparison(outcome)),
        OutputFormat::Json => json::comparison(outcome),
    }
}
