use crate::types::rating::CombinedRating;

/// Illustrative monthly amounts in whole dollars; not official rates.
const SAMPLE_MONTHLY_RATES: [(u8, u32); 10] = [
    (10, 171),
    (20, 338),
    (30, 524),
    (40, 755),
    (50, 1075),
    (60, 1361),
    (70, 1716),
    (80, 1995),
    (90, 2241),
    (100, 3737),
];

pub fn lookup(combined: CombinedRating) -> u32 {
    lookup_percent(u32::from(combined.percent()))
}

/// Any percentage missing from the table, including 0, maps to 0.
pub fn lookup_percent(percent: u32) -> u32 {
    SAMPLE_MONTHLY_RATES
        .iter()
        .find(|(rate_percent, _)| u32::from(*rate_percent) == percent)
        .map(|(_, amount)| *amount)
        .unwrap_or(0)
}
