use chrono::{Duration, NaiveDate};

/// Candidate departure dates for a multi-month window: four weekly-spaced
/// dates per month, starting at `from`.
pub fn weekly_departures(from: NaiveDate, months: u32) -> Vec<NaiveDate> {
    (0..months * 4)
        .map(|i| from + Duration::days(i as i64 * 7))
        .collect()
}
