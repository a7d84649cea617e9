//! Dale Reckoning, the calendar of the Forgotten Realms.
//!
//! Twelve 30-day months with festival days between them. Shieldmeet exists
//! only in Gregorian leap years, so every later day shifts by one.
//!
//! | Day of year (common) | Day of year (leap) | Name |
//! |----------------------|--------------------|------|
//! | 1–30 | 1–30 | Hammer |
//! | 31 | 31 | Midwinter |
//! | 32–61 | 32–61 | Alturiak |
//! | 62–91 | 62–91 | Ches |
//! | 92–121 | 92–121 | Tarkash |
//! | 122 | 122 | Greengrass |
//! | 123–152 | 123–152 | Mirtul |
//! | 153–182 | 153–182 | Kythorn |
//! | 183–212 | 183–212 | Flamerule |
//! | 213 | 213 | Midsummer |
//! | | 214 | Shieldmeet |
//! | 214–243 | 215–244 | Elesias |
//! | 244–273 | 245–274 | Eleint |
//! | 274 | 275 | Harvesttide |
//! | 275–304 | 276–305 | Marpenoth |
//! | 305–334 | 306–335 | Uktar |
//! | 335 | 336 | The Feast of the Moon |
//! | 336–365 | 337–366 | Nightal |
//!
//! The year label is the Gregorian year minus 524.

use super::is_leap_year;
use crate::constants::DALE_RECKONING_YEAR_OFFSET;
use alt_time_core::utils::english_ordinal;
use alt_time_core::{AltTimeError, AltTimeResult};
use chrono::{DateTime, Datelike, TimeZone};
use std::fmt;

const DAYS_PER_MONTH: u32 = 30;

#[derive(Debug, Clone, Copy)]
enum Segment {
    Month(&'static str),
    Festival(&'static str),
    LeapFestival(&'static str),
}

const YEAR: [Segment; 18] = [
    Segment::Month("Hammer"),
    Segment::Festival("Midwinter"),
    Segment::Month("Alturiak"),
    Segment::Month("Ches"),
    Segment::Month("Tarkash"),
    Segment::Festival("Greengrass"),
    Segment::Month("Mirtul"),
    Segment::Month("Kythorn"),
    Segment::Month("Flamerule"),
    Segment::Festival("Midsummer"),
    Segment::LeapFestival("Shieldmeet"),
    Segment::Month("Elesias"),
    Segment::Month("Eleint"),
    Segment::Festival("Harvesttide"),
    Segment::Month("Marpenoth"),
    Segment::Month("Uktar"),
    Segment::Festival("The Feast of the Moon"),
    Segment::Month("Nightal"),
];

/// A day in Dale Reckoning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaleDate {
    /// A day of one of the twelve months, `day` in `1..=30`.
    Day {
        month: &'static str,
        day: u32,
        year: i32,
    },
    /// A festival day outside the months.
    Holiday { name: &'static str, year: i32 },
}

impl DaleDate {
    pub fn year(&self) -> i32 {
        match self {
            DaleDate::Day { year, .. } | DaleDate::Holiday { year, .. } => *year,
        }
    }

    pub fn is_holiday(&self) -> bool {
        matches!(self, DaleDate::Holiday { .. })
    }
}

impl fmt::Display for DaleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaleDate::Day { month, day, year } => {
                write!(f, "{} {}, {} DR", month, english_ordinal(*day), year)
            }
            DaleDate::Holiday { name, year } => {
                write!(f, "{} {} DR — Happy holiday feast!", name, year)
            }
        }
    }
}

/// Dale Reckoning date of `datetime`'s civil day.
pub fn dale_reckoning<Tz: TimeZone>(datetime: &DateTime<Tz>) -> AltTimeResult<DaleDate> {
    dale_from_ordinal(datetime.year(), datetime.ordinal())
}

/// Dale Reckoning date for a 1-based day of a Gregorian `year`.
pub fn dale_from_ordinal(year: i32, day_of_year: u32) -> AltTimeResult<DaleDate> {
    let leap = is_leap_year(year);
    let dale_year = year - DALE_RECKONING_YEAR_OFFSET;
    let mut remaining = day_of_year;

    if remaining == 0 {
        return Err(out_of_range(year, day_of_year));
    }

    for segment in YEAR {
        match segment {
            Segment::Month(month) => {
                if remaining <= DAYS_PER_MONTH {
                    return Ok(DaleDate::Day {
                        month,
                        day: remaining,
                        year: dale_year,
                    });
                }
                remaining -= DAYS_PER_MONTH;
            }
            Segment::LeapFestival(_) if !leap => {}
            Segment::Festival(name) | Segment::LeapFestival(name) => {
                if remaining == 1 {
                    return Ok(DaleDate::Holiday {
                        name,
                        year: dale_year,
                    });
                }
                remaining -= 1;
            }
        }
    }

    Err(out_of_range(year, day_of_year))
}

fn out_of_range(year: i32, day_of_year: u32) -> AltTimeError {
    AltTimeError::invalid_date(
        year as i64,
        1,
        day_of_year,
        "day of year is outside the Gregorian year",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn render(year: i32, day_of_year: u32) -> String {
        dale_from_ordinal(year, day_of_year).unwrap().to_string()
    }

    #[test]
    fn test_first_days() {
        assert_eq!(render(2025, 1), "Hammer 1st, 1501 DR");
        assert_eq!(render(2025, 2), "Hammer 2nd, 1501 DR");
        assert_eq!(render(2025, 3), "Hammer 3rd, 1501 DR");
        assert_eq!(render(2025, 11), "Hammer 11th, 1501 DR");
        assert_eq!(render(2025, 30), "Hammer 30th, 1501 DR");
    }

    #[test]
    fn test_midwinter() {
        assert_eq!(render(2025, 31), "Midwinter 1501 DR — Happy holiday feast!");
        assert_eq!(render(2024, 31), "Midwinter 1500 DR — Happy holiday feast!");
        assert_eq!(render(2025, 32), "Alturiak 1st, 1501 DR");
    }

    #[test]
    fn test_common_year_boundaries() {
        assert_eq!(render(2025, 122), "Greengrass 1501 DR — Happy holiday feast!");
        assert_eq!(render(2025, 213), "Midsummer 1501 DR — Happy holiday feast!");
        assert_eq!(render(2025, 214), "Elesias 1st, 1501 DR");
        assert_eq!(render(2025, 274), "Harvesttide 1501 DR — Happy holiday feast!");
        assert_eq!(render(2025, 335), "The Feast of the Moon 1501 DR — Happy holiday feast!");
        assert_eq!(render(2025, 336), "Nightal 1st, 1501 DR");
        assert_eq!(render(2025, 365), "Nightal 30th, 1501 DR");
        assert!(dale_from_ordinal(2025, 366).is_err());
    }

    #[test]
    fn test_leap_year_boundaries() {
        assert_eq!(render(2024, 214), "Shieldmeet 1500 DR — Happy holiday feast!");
        assert_eq!(render(2024, 215), "Elesias 1st, 1500 DR");
        assert_eq!(render(2024, 275), "Harvesttide 1500 DR — Happy holiday feast!");
        assert_eq!(render(2024, 336), "The Feast of the Moon 1500 DR — Happy holiday feast!");
        assert_eq!(render(2024, 366), "Nightal 30th, 1500 DR");
        assert!(dale_from_ordinal(2024, 367).is_err());
    }

    #[test]
    fn test_every_day_is_named() {
        for (year, days) in [(2023, 365), (2024, 366)] {
            let holidays = (1..=days)
                .filter(|&doy| dale_from_ordinal(year, doy).unwrap().is_holiday())
                .count();
            assert_eq!(holidays as u32, days - 12 * DAYS_PER_MONTH);
        }
        assert!(dale_from_ordinal(2025, 0).is_err());
    }

    #[test]
    fn test_from_datetime() {
        let dt = Utc.with_ymd_and_hms(2025, 12, 31, 12, 0, 0).unwrap();
        let date = dale_reckoning(&dt).unwrap();
        assert_eq!(date.year(), 1501);
        assert_eq!(date.to_string(), "Nightal 30th, 1501 DR");
    }
}
