use crate::types::rating::{CombinedRating, Rating};

/// Applies the whole-person formula, largest rating first, against the remaining
/// unimpaired capacity, then rounds to a multiple of ten.
pub fn combine(ratings: &[Rating]) -> CombinedRating {
    if ratings.is_empty() {
        return CombinedRating::ZERO;
    }

    let mut sorted = ratings.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let accumulated = sorted.iter().fold(0.0_f64, |acc, rating| {
        acc + (100.0 - acc) * (f64::from(rating.percent()) / 100.0)
    });

    // accumulated stays within 0.0..=100.0, so round() is half-up here
    let whole = accumulated.round() as u32;
    let combined = CombinedRating::from_whole_percent(whole);
    tracing::debug!(
        count = ratings.len(),
        accumulated,
        combined = combined.percent(),
        "combined ratings"
    );
    combined
}
