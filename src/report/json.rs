use crate::error::Result;
use crate::types::rating::ScenarioName;
use crate::types::report::{CompareOutcome, ScenarioSummary, DISCLAIMER};
use serde_json::json;

pub fn scenario(name: ScenarioName, summary: Option<&ScenarioSummary>) -> Result<String> {
    let document = match summary {
        Some(summary) => json!({
            "scenario": summary,
            "disclaimer": DISCLAIMER,
        }),
        None => json!({ "missing": name }),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn comparison(outcome: &CompareOutcome) -> Result<String> {
    let document = match outcome {
        CompareOutcome::Missing(name) => json!({ "missing": name }),
        CompareOutcome::Ready(comparison) => json!({
            "comparison": comparison,
            "disclaimer": DISCLAIMER,
        }),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
