use serde::Serialize;
use std::fmt;

pub const MAX_PERCENT: u8 = 100;

/// A single condition rating, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const ZERO: Rating = Rating(0);

    /// Accepts values inside `0..=100`; anything else is `None`.
    pub fn new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|percent| *percent <= MAX_PERCENT)
            .map(Rating)
    }

    /// Returns the stored rating and whether the raw value had to be replaced by zero.
    pub fn coerce(value: i64) -> (Self, bool) {
        match Self::new(value) {
            Some(rating) => (rating, false),
            None => (Self::ZERO, true),
        }
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Ordered ratings for one scenario. An empty list means "not yet entered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RatingList(Vec<Rating>);

impl RatingList {
    pub fn new(ratings: Vec<Rating>) -> Self {
        Self(ratings)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Rating] {
        &self.0
    }
}

impl FromIterator<Rating> for RatingList {
    fn from_iter<I: IntoIterator<Item = Rating>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for RatingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self.0.iter().map(Rating::to_string).collect::<Vec<_>>();
        f.write_str(&parts.join(" "))
    }
}

/// Whole-person combined rating: a multiple of ten in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CombinedRating(u8);

impl CombinedRating {
    pub const ZERO: CombinedRating = CombinedRating(0);

    /// Rounds to the nearest ten (remainder 5 goes up) and caps at 100.
    pub fn from_whole_percent(percent: u32) -> Self {
        let remainder = percent % 10;
        let rounded = if remainder >= 5 {
            percent + (10 - remainder)
        } else {
            percent - remainder
        };
        Self(rounded.min(u32::from(MAX_PERCENT)) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CombinedRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioName {
    Current,
    Proposed,
}

impl ScenarioName {
    /// Capitalized label used in report lines.
    pub fn title(self) -> &'static str {
        match self {
            ScenarioName::Current => "Current",
            ScenarioName::Proposed => "Proposed",
        }
    }

    /// Lowercase label used in prompts.
    pub fn label(self) -> &'static str {
        match self {
            ScenarioName::Current => "current",
            ScenarioName::Proposed => "proposed",
        }
    }
}
