//! Imperial dating: `check fraction.year.000.M<millennium>`.
//!
//! The year fraction counts elapsed hours of the UTC year scaled by the
//! Makr constant, so it runs from `000` to `999` across one year.

use crate::constants::IMPERIAL_MAKR_CONSTANT;
use alt_time_core::constants::HOURS_PER_DAY;
use alt_time_core::utils::ceil_div;
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use std::fmt;

const CHECK_NUMBER: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImperialDate {
    pub check: u8,
    pub fraction: u32,
    /// Year within the millennium, `0..=999`.
    pub year: u32,
    pub millennium: i64,
}

impl fmt::Display for ImperialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:03}.{:03}.000.M{}",
            self.check, self.fraction, self.year, self.millennium
        )
    }
}

/// Imperial date of `datetime`, read in UTC.
pub fn imperial_date<Tz: TimeZone>(datetime: &DateTime<Tz>) -> ImperialDate {
    let utc = datetime.with_timezone(&Utc);
    imperial_from_parts(utc.year(), utc.ordinal(), utc.hour())
}

/// Imperial date from a Gregorian year, 1-based day of year and UTC hour.
pub fn imperial_from_parts(year: i32, day_of_year: u32, hour: u32) -> ImperialDate {
    let elapsed_hours = (day_of_year.saturating_sub(1) as i64) * HOURS_PER_DAY + hour as i64;
    let fraction = (elapsed_hours as f64 * IMPERIAL_MAKR_CONSTANT).floor() as u32;
    ImperialDate {
        check: CHECK_NUMBER,
        fraction,
        year: year.rem_euclid(1000) as u32,
        millennium: ceil_div(year as i64, 1000),
    }
}
