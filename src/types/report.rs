use crate::types::rating::{CombinedRating, RatingList, ScenarioName};
use serde::Serialize;

pub const DISCLAIMER: &str = "(Compensation amounts are sample values, not official VA numbers.)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub name: ScenarioName,
    pub ratings: RatingList,
    pub combined: CombinedRating,
    pub monthly_compensation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "direction", content = "amount", rename_all = "snake_case")]
pub enum PayChange {
    Increase(u32),
    Decrease(u32),
    NoChange,
}

impl PayChange {
    pub fn between(current: u32, proposed: u32) -> Self {
        if proposed > current {
            PayChange::Increase(proposed - current)
        } else if proposed < current {
            PayChange::Decrease(current - proposed)
        } else {
            PayChange::NoChange
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub current: ScenarioSummary,
    pub proposed: ScenarioSummary,
    pub change: PayChange,
}

/// Outcome of asking for a comparison: either both scenarios or the first one missing.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareOutcome {
    Missing(ScenarioName),
    Ready(Box<Comparison>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pay_change_reports_magnitude() {
        assert_eq!(PayChange::between(755, 1716), PayChange::Increase(961));
        assert_eq!(PayChange::between(1716, 755), PayChange::Decrease(961));
        assert_eq!(PayChange::between(524, 524), PayChange::NoChange);
    }
}
