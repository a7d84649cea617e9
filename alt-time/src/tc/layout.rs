//! TC calendar layout: from timebase seconds to year, month, day and time.
//!
//! # The TC Calendar
//!
//! | Unit | Length |
//! |------|--------|
//! | Year | 365 days, 366 when `year % 4 == 0` and `year % 128 != 0`, plus synthetic leap seconds |
//! | Month | 28 days, numbered from 0; 13 full months fill 364 days |
//! | Day | 24 hours of 60 minutes of 60 seconds |
//!
//! Days beyond the 13th full month (one in a common year, two in a leap
//! year) land in month 13 by plain floor division, and so does a synthetic
//! leap second. Year 0 begins at TC second 0; negative seconds fall in
//! negative years.
//!
//! # Year Search
//!
//! [`year_of`] finds the year containing a TC second in three regimes:
//!
//! 1. **Negative seconds**: shift by whole 128-year cycles into `[0, cycle)`
//!    with Euclidean division, then solve inside one cycle. Negative years
//!    never carry synthetic leap seconds, so every cycle there is exactly
//!    [`SECONDS_PER_TC_CYCLE`] long.
//! 2. **Registry window**: walk year-by-year from year 0 up to
//!    [`LeapSecondRegistry::walk_limit`], the first cycle boundary after the
//!    last synthetic leap year. At most one cycle of iterations.
//! 3. **Beyond the registry**: whole cycles, then 4-year groups, then single
//!    years, all in closed form.
//!
//! [`year_of_linear`] is the unbounded year-by-year walk that defines the
//! correct answer. The tests hold both implementations to agreement.
//!
//! # Usage
//!
//! ```
//! use alt_time::registry::LeapSecondRegistry;
//! use alt_time::tc::layout::{decompose, LayoutOptions};
//! use alt_time::TcTimestamp;
//!
//! let registry = LeapSecondRegistry::standard();
//! let date = decompose(TcTimestamp::from(0), registry, LayoutOptions::default()).unwrap();
//! assert_eq!((date.year, date.month, date.day), (0, 0, 0));
//! assert_eq!(date.to_string(), "0.0.0,0.0.0 TC");
//!
//! let date = decompose(TcTimestamp::from(-1), registry, LayoutOptions::default()).unwrap();
//! assert_eq!(date.year, -1);
//! assert_eq!((date.month, date.day, date.hour, date.minute, date.second), (13, 0, 23, 59, 59));
//! ```

use crate::constants::{
    SECONDS_PER_TC_CYCLE, SECONDS_PER_TC_MONTH, SECONDS_PER_TC_QUAD, SECONDS_PER_TC_YEAR,
    TC_YEARS_PER_CYCLE,
};
use crate::registry::LeapSecondRegistry;
use crate::tc::converter::tc_to_instant;
use crate::tc::date::{designator, TcDate};
use crate::tc::timestamp::TcTimestamp;
use alt_time_core::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use alt_time_core::{AltTimeError, AltTimeResult, MathErrorKind};
use tracing::debug;

/// Variant parameters for [`decompose`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Restricts synthetic leap seconds to years at or before this one and
    /// tags the designator (`TC<base>`).
    pub year_base: Option<i64>,
    /// Seconds added to the timestamp before the year search.
    pub offset: i64,
}

impl LayoutOptions {
    pub fn with_year_base(mut self, year_base: i64) -> Self {
        self.year_base = Some(year_base);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }
}

/// Returns `true` if TC `year` carries a leap day.
///
/// Every fourth year does, except multiples of 128.
#[inline]
pub fn is_tc_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && year.rem_euclid(TC_YEARS_PER_CYCLE) != 0
}

/// Length of TC `year` in seconds, synthetic leap seconds included.
pub fn year_length(year: i64, registry: &LeapSecondRegistry, year_base: Option<i64>) -> i64 {
    let mut seconds = SECONDS_PER_TC_YEAR;
    if is_tc_leap_year(year) {
        seconds += SECONDS_PER_DAY;
    }
    seconds + registry.synthetic_leap_seconds(year, year_base)
}

/// Finds the TC year containing `seconds` and the seconds elapsed within it.
///
/// The remainder always satisfies `0 <= remainder < year_length(year)`; a
/// violation means the registry and cycle constants disagree and is reported
/// as a `CalculationError`.
pub fn year_of(
    seconds: i64,
    registry: &LeapSecondRegistry,
    year_base: Option<i64>,
) -> AltTimeResult<(i64, i64)> {
    let (year, remainder) = if seconds < 0 {
        let cycles = seconds.div_euclid(SECONDS_PER_TC_CYCLE);
        let (year_in_cycle, remainder) =
            position_in_cycle(seconds.rem_euclid(SECONDS_PER_TC_CYCLE));
        (cycles * TC_YEARS_PER_CYCLE + year_in_cycle, remainder)
    } else {
        year_of_non_negative(seconds, registry, year_base)
    };

    let length = year_length(year, registry, year_base);
    if !(0..length).contains(&remainder) {
        return Err(AltTimeError::calculation_error(
            "tc year search",
            &format!(
                "remainder {} outside year {} of length {} for tc second {}",
                remainder, year, length, seconds
            ),
        ));
    }
    Ok((year, remainder))
}

fn year_of_non_negative(
    seconds: i64,
    registry: &LeapSecondRegistry,
    year_base: Option<i64>,
) -> (i64, i64) {
    let limit = registry.walk_limit();
    let mut remaining = seconds;
    let mut year = 0;
    while year < limit {
        let length = year_length(year, registry, year_base);
        if remaining < length {
            return (year, remaining);
        }
        remaining -= length;
        year += 1;
    }

    let cycles = remaining / SECONDS_PER_TC_CYCLE;
    let (year_in_cycle, remainder) = position_in_cycle(remaining % SECONDS_PER_TC_CYCLE);
    (limit + cycles * TC_YEARS_PER_CYCLE + year_in_cycle, remainder)
}

/// Year within a 128-year cycle free of synthetic leap seconds, and the
/// seconds into that year. `seconds` must lie in `[0, SECONDS_PER_TC_CYCLE)`.
///
/// Cycle year 0 is common. Years 1 through 124 form 31 four-year groups whose
/// last year is the leap year; years 125 to 127 are common.
fn position_in_cycle(seconds: i64) -> (i64, i64) {
    if seconds < SECONDS_PER_TC_YEAR {
        return (0, seconds);
    }
    let after_first = seconds - SECONDS_PER_TC_YEAR;
    let groups = after_first / SECONDS_PER_TC_QUAD;
    let within_group = after_first % SECONDS_PER_TC_QUAD;
    // Only the fourth year of a group is long, so it absorbs the tail.
    let year_in_group = (within_group / SECONDS_PER_TC_YEAR).min(3);
    (
        1 + 4 * groups + year_in_group,
        within_group - year_in_group * SECONDS_PER_TC_YEAR,
    )
}

/// Reference year search: walk one year at a time from year 0.
///
/// Forward for non-negative seconds, backward for negative ones. The cost is
/// linear in the distance from the epoch.
pub fn year_of_linear(
    seconds: i64,
    registry: &LeapSecondRegistry,
    year_base: Option<i64>,
) -> (i64, i64) {
    let mut year = 0;
    let mut remaining = seconds;
    if remaining >= 0 {
        loop {
            let length = year_length(year, registry, year_base);
            if remaining < length {
                return (year, remaining);
            }
            remaining -= length;
            year += 1;
        }
    }
    loop {
        year -= 1;
        remaining += year_length(year, registry, year_base);
        if remaining >= 0 {
            return (year, remaining);
        }
    }
}

/// TC second at which `year` begins.
pub fn year_start(
    year: i64,
    registry: &LeapSecondRegistry,
    year_base: Option<i64>,
) -> AltTimeResult<i64> {
    let limit = registry.walk_limit();
    if (0..=limit).contains(&year) {
        return Ok((0..year)
            .map(|y| year_length(y, registry, year_base))
            .sum());
    }

    let (anchor_year, anchor_seconds) = if year < 0 {
        (0, 0)
    } else {
        (limit, year_start(limit, registry, year_base)?)
    };
    let delta = year - anchor_year;
    let cycles = delta.div_euclid(TC_YEARS_PER_CYCLE);
    let year_in_cycle = delta.rem_euclid(TC_YEARS_PER_CYCLE);

    cycles
        .checked_mul(SECONDS_PER_TC_CYCLE)
        .and_then(|s| s.checked_add(anchor_seconds))
        .and_then(|s| s.checked_add(cycle_offset(year_in_cycle)))
        .ok_or_else(|| {
            AltTimeError::math_error(
                "tc year start",
                MathErrorKind::Overflow,
                &format!("year {} is outside the TC timebase", year),
            )
        })
}

/// Seconds from the start of a synthetic-free cycle to its year `k` (0..=128).
fn cycle_offset(k: i64) -> i64 {
    let leap_days = if k == 0 { 0 } else { (k - 1) / 4 };
    k * SECONDS_PER_TC_YEAR + leap_days * SECONDS_PER_DAY
}

/// Expands a TC timestamp into calendar fields.
///
/// `options.offset` shifts the timestamp before the year search; the carried
/// `tc_timestamp`, `unix_timestamp` and leap flag describe the unshifted value.
pub fn decompose(
    tc: TcTimestamp,
    registry: &LeapSecondRegistry,
    options: LayoutOptions,
) -> AltTimeResult<TcDate> {
    let shifted = tc.checked_add_seconds(options.offset)?;
    let (year, mut remaining) = year_of(shifted.seconds(), registry, options.year_base)?;

    let month = remaining / SECONDS_PER_TC_MONTH;
    remaining -= month * SECONDS_PER_TC_MONTH;
    let day = remaining / SECONDS_PER_DAY;
    remaining -= day * SECONDS_PER_DAY;
    let hour = remaining / SECONDS_PER_HOUR;
    remaining -= hour * SECONDS_PER_HOUR;
    let minute = remaining / SECONDS_PER_MINUTE;
    remaining -= minute * SECONDS_PER_MINUTE;

    let instant = tc_to_instant(tc, registry)?;
    debug!(tc = tc.seconds(), year, month, day, "decomposed tc timestamp");

    Ok(TcDate {
        year,
        month: month as u8,
        day: day as u8,
        hour: hour as u8,
        minute: minute as u8,
        second: remaining as u8,
        nanos: shifted.nanos(),
        designator: designator(options.year_base),
        year_base: options.year_base,
        offset: options.offset,
        tc_timestamp: tc,
        unix_timestamp: instant.unix_seconds(),
        is_leap_second: instant.is_leap_second(),
    })
}

/// Rebuilds the TC timestamp that [`decompose`] expanded into `date`.
pub fn compose(date: &TcDate, registry: &LeapSecondRegistry) -> AltTimeResult<TcTimestamp> {
    let start = year_start(date.year, registry, date.year_base)?;
    let within = date.month as i64 * SECONDS_PER_TC_MONTH
        + date.day as i64 * SECONDS_PER_DAY
        + date.hour as i64 * SECONDS_PER_HOUR
        + date.minute as i64 * SECONDS_PER_MINUTE
        + date.second as i64;
    TcTimestamp::new(start, date.nanos)
        .checked_add_seconds(within)?
        .checked_add_seconds(-date.offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TC_LEAP_SECOND_YEARS;

    fn standard() -> &'static LeapSecondRegistry {
        LeapSecondRegistry::standard()
    }

    #[test]
    fn test_leap_day_rule() {
        assert!(is_tc_leap_year(4));
        assert!(is_tc_leap_year(124));
        assert!(is_tc_leap_year(-4));
        assert!(!is_tc_leap_year(0));
        assert!(!is_tc_leap_year(1));
        assert!(!is_tc_leap_year(128));
        assert!(!is_tc_leap_year(-128));
        assert!(!is_tc_leap_year(256));
    }

    #[test]
    fn test_year_lengths() {
        let registry = standard();
        assert_eq!(year_length(1, registry, None), 31_536_000);
        assert_eq!(year_length(4, registry, None), 31_536_000 + 86_400 + 1);
        assert!(year_length(4, registry, None) > year_length(1, registry, None));
        assert_eq!(year_length(128, registry, None), year_length(1, registry, None));
        assert_eq!(year_length(2, registry, None), 31_536_001);
        assert_eq!(year_length(2, registry, Some(1)), 31_536_000);
    }

    #[test]
    fn test_cycle_constants() {
        let registry = standard();
        let pure: i64 = (128..256).map(|y| year_length(y, registry, None)).sum();
        assert_eq!(pure, SECONDS_PER_TC_CYCLE);
        let with_leaps: i64 = (0..128).map(|y| year_length(y, registry, None)).sum();
        assert_eq!(with_leaps, SECONDS_PER_TC_CYCLE + TC_LEAP_SECOND_YEARS.len() as i64);
        assert_eq!(SECONDS_PER_TC_CYCLE, 4_039_286_400);
    }

    #[test]
    fn test_position_in_cycle_matches_walk() {
        let mut start = 0;
        for k in 0..128 {
            let length = if is_tc_leap_year(k) {
                SECONDS_PER_TC_YEAR + SECONDS_PER_DAY
            } else {
                SECONDS_PER_TC_YEAR
            };
            assert_eq!(position_in_cycle(start), (k, 0), "start of cycle year {}", k);
            assert_eq!(
                position_in_cycle(start + length - 1),
                (k, length - 1),
                "end of cycle year {}",
                k
            );
            assert_eq!(cycle_offset(k), start);
            start += length;
        }
        assert_eq!(cycle_offset(128), SECONDS_PER_TC_CYCLE);
    }

    #[test]
    fn test_year_of_agrees_with_linear_on_every_boundary() {
        let registry = standard();
        for year in -300..600 {
            let start = year_start(year, registry, None).unwrap();
            let length = year_length(year, registry, None);
            for probe in [start, start + 1, start + length / 2, start + length - 1] {
                assert_eq!(
                    year_of(probe, registry, None).unwrap(),
                    year_of_linear(probe, registry, None),
                    "probe {} in year {}",
                    probe,
                    year
                );
            }
            assert_eq!(year_of(start, registry, None).unwrap(), (year, 0));
        }
    }

    #[test]
    fn test_year_of_with_year_base() {
        let registry = standard();
        for base in [0, 5, 20, 42, 100] {
            for year in 0..140 {
                let start = year_start(year, registry, Some(base)).unwrap();
                assert_eq!(year_of(start, registry, Some(base)).unwrap(), (year, 0));
                assert_eq!(
                    year_of(start - 1, registry, Some(base)).unwrap(),
                    year_of_linear(start - 1, registry, Some(base))
                );
            }
        }
    }

    #[test]
    fn test_year_start_negative_cycles() {
        let registry = standard();
        assert_eq!(year_start(-128, registry, None).unwrap(), -SECONDS_PER_TC_CYCLE);
        assert_eq!(year_start(-1, registry, None).unwrap(), -SECONDS_PER_TC_YEAR);
        assert_eq!(year_start(0, registry, None).unwrap(), 0);
        assert_eq!(year_start(1, registry, None).unwrap(), SECONDS_PER_TC_YEAR);
        assert!(year_start(i64::MAX / 2, registry, None).is_err());
    }

    #[test]
    fn test_extreme_seconds_stay_consistent() {
        let registry = standard();
        for seconds in [i64::MIN, i64::MIN + 1, i64::MAX, i64::MAX - 1] {
            let (year, remainder) = year_of(seconds, registry, None).unwrap();
            assert!(remainder >= 0 && remainder < year_length(year, registry, None));
        }
    }

    #[test]
    fn test_decompose_fields() {
        let registry = standard();
        // Year 1 starts after the 365-day year 0.
        let tc = SECONDS_PER_TC_YEAR + 2 * SECONDS_PER_TC_MONTH + 3 * SECONDS_PER_DAY + 4 * 3600 + 5 * 60 + 6;
        let date = decompose(TcTimestamp::new(tc, 500_000_000), registry, LayoutOptions::default())
            .unwrap();
        assert_eq!(
            (date.year, date.month, date.day, date.hour, date.minute, date.second),
            (1, 2, 3, 4, 5, 6)
        );
        assert_eq!(date.nanos, 500_000_000);
        assert_eq!(date.designator, "TC");
        assert_eq!(date.to_string(), "1.2.3,4.5.6.5 TC");
    }

    #[test]
    fn test_intercalary_month() {
        let registry = standard();
        let last_day = 364 * SECONDS_PER_DAY;
        let date = decompose(TcTimestamp::from(last_day), registry, LayoutOptions::default()).unwrap();
        assert_eq!((date.year, date.month, date.day), (0, 13, 0));
    }

    #[test]
    fn test_synthetic_leap_second_is_last_second_of_year() {
        let registry = standard();
        let next = year_start(3, registry, None).unwrap();
        let date = decompose(TcTimestamp::from(next - 1), registry, LayoutOptions::default()).unwrap();
        assert_eq!(date.year, 2);
        assert_eq!((date.month, date.day, date.hour, date.minute, date.second), (13, 1, 0, 0, 0));
    }

    #[test]
    fn test_decompose_options() {
        let registry = standard();
        let options = LayoutOptions::default().with_year_base(7).with_offset(-10);
        let date = decompose(TcTimestamp::from(10), registry, options).unwrap();
        assert_eq!(date.designator, "TC7");
        assert_eq!((date.year, date.month, date.day, date.second), (0, 0, 0, 0));
        assert_eq!(date.tc_timestamp, TcTimestamp::from(10));
        assert_eq!(date.unix_timestamp, 10 - 864_000);
        assert_eq!(compose(&date, registry).unwrap(), TcTimestamp::from(10));
    }

    #[test]
    fn test_compose_round_trip_samples() {
        let registry = standard();
        for seconds in [
            -10_000_000_000,
            -SECONDS_PER_TC_CYCLE,
            -1,
            0,
            1,
            864_000,
            1_700_000_000,
            SECONDS_PER_TC_CYCLE + 17,
            100_000_000_000,
        ] {
            let tc = TcTimestamp::new(seconds, 42);
            let date = decompose(tc, registry, LayoutOptions::default()).unwrap();
            assert_eq!(compose(&date, registry).unwrap(), tc, "tc {}", seconds);
        }
    }

    #[test]
    fn test_decompose_carries_leap_flag() {
        let registry = standard();
        // First leap second: L + 864000 + 0.
        let leap_tc = TcTimestamp::from(78_796_800 + 864_000);
        let date = decompose(leap_tc, registry, LayoutOptions::default()).unwrap();
        assert!(date.is_leap_second);
        assert_eq!(date.unix_timestamp, 78_796_800);
    }
}
