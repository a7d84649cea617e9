//! Whole-year shifts applied to a civil date before any calendar is computed.

use alt_time_core::{AltTimeError, AltTimeResult};
use chrono::{DateTime, Datelike, Months, TimeZone};

/// Shifts `datetime` by `years` calendar years, keeping the wall-clock time
/// and offset.
///
/// February 29 becomes February 28 when the target year is not a leap year.
pub fn apply_year_offset<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    years: i32,
) -> AltTimeResult<DateTime<Tz>> {
    if years == 0 {
        return Ok(datetime.clone());
    }

    let months = Months::new(years.unsigned_abs().saturating_mul(12));
    let shifted = if years > 0 {
        datetime.clone().checked_add_months(months)
    } else {
        datetime.clone().checked_sub_months(months)
    };

    shifted.ok_or_else(|| {
        AltTimeError::invalid_date(
            datetime.year() as i64 + years as i64,
            datetime.month(),
            datetime.day(),
            "year offset moves the date outside the supported calendar range",
        )
    })
}
