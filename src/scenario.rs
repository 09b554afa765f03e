use crate::types::rating::{Rating, RatingList, ScenarioName};
use std::collections::HashMap;

/// A raw value that was outside `0..=100` and stored as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoercedRating {
    pub position: usize,
    pub raw: i64,
}

/// Clamps raw input to valid ratings, reporting every value that was replaced.
pub fn coerce_ratings(raw_values: &[i64]) -> (RatingList, Vec<CoercedRating>) {
    let mut coerced = Vec::new();
    let list = raw_values
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let (rating, replaced) = Rating::coerce(*raw);
            if replaced {
                tracing::warn!(position = index + 1, raw, "rating out of range, stored as 0");
                coerced.push(CoercedRating {
                    position: index + 1,
                    raw: *raw,
                });
            }
            rating
        })
        .collect();
    (list, coerced)
}

/// Session-owned ratings, at most one list per scenario name.
#[derive(Debug, Default)]
pub struct ScenarioStore {
    scenarios: HashMap<ScenarioName, RatingList>,
}

impl ScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was stored under `name` and returns a snapshot of the new list.
    pub fn record(&mut self, name: ScenarioName, ratings: RatingList) -> RatingList {
        tracing::info!(scenario = name.label(), count = ratings.len(), "scenario recorded");
        self.scenarios.insert(name, ratings.clone());
        ratings
    }

    /// Returns `None` until a non-empty list has been recorded.
    pub fn get(&self, name: ScenarioName) -> Option<&RatingList> {
        self.scenarios.get(&name).filter(|ratings| !ratings.is_empty())
    }
}
