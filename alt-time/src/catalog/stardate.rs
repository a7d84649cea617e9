use super::days_in_year;
use crate::constants::STARDATE_BASE_YEAR;
use chrono::{DateTime, Datelike, TimeZone};

/// Linear stardate: a thousand units per year counted from 2323, rounded to
/// two decimals.
pub fn stardate<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    stardate_from_ordinal(datetime.year(), datetime.ordinal())
}

/// Stardate for a 1-based day of a Gregorian `year`.
pub fn stardate_from_ordinal(year: i32, day_of_year: u32) -> f64 {
    stardate_from_parts(year, day_of_year, days_in_year(year))
}

/// `(year - 2323) * 1000 + day_of_year / days_in_year * 1000`, rounded to two
/// decimals.
pub fn stardate_from_parts(year: i32, day_of_year: u32, days_in_year: u32) -> f64 {
    let years = (year as f64 - STARDATE_BASE_YEAR as f64) * 1000.0;
    let fraction = day_of_year as f64 / days_in_year as f64 * 1000.0;
    ((years + fraction) * 100.0).round() / 100.0
}
