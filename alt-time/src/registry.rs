//! Leap-second registry: historical UTC insertions and synthetic TC leap years.
//!
//! The registry holds two fixed, ascending tables:
//!
//! | Table | Unit | Consumer |
//! |-------|------|----------|
//! | Historical insertions | Unix seconds | [`crate::tc::converter`] (instant ⇄ TC timebase) |
//! | Synthetic leap years | TC calendar years | [`crate::tc::layout`] (year lengths) |
//!
//! An insertion instant `L` is the Unix second at which the UTC day following a
//! `23:59:60` begins. Every Unix second `u >= L` is one second further from the
//! TC epoch than its nominal distance, and the leap second itself sits between
//! `L - 1` and `L`.
//!
//! Synthetic leap years carry one extra second each, but only inside the closed
//! window `[min_tc_year, max_tc_year]`. Years outside that window never receive
//! one, which keeps the 128-year cycle length exact beyond the table.
//!
//! ```
//! use alt_time::registry::LeapSecondRegistry;
//!
//! let registry = LeapSecondRegistry::standard();
//! // 1972-07-01T00:00:00Z follows the first leap second.
//! assert!(registry.is_insertion(78_796_800));
//! assert_eq!(registry.count_at_or_before(78_796_800), 1);
//! assert_eq!(registry.count_at_or_before(78_796_799), 0);
//! ```

use crate::constants::{TC_LEAP_SECOND_YEARS, TC_YEARS_PER_CYCLE, UTC_LEAP_SECONDS};
use alt_time_core::utils::ceil_div;
use alt_time_core::{AltTimeError, AltTimeResult};

/// Immutable leap-second tables.
///
/// Cheap to copy; the tables themselves are `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeapSecondRegistry {
    insertions: &'static [i64],
    tc_years: &'static [i64],
}

static STANDARD: LeapSecondRegistry = LeapSecondRegistry {
    insertions: &UTC_LEAP_SECONDS,
    tc_years: &TC_LEAP_SECOND_YEARS,
};

impl LeapSecondRegistry {
    /// Builds a registry from custom tables.
    ///
    /// Both tables must be strictly ascending, and synthetic leap years must
    /// not be negative: the year search treats every cycle before year 0 as
    /// free of synthetic seconds. Returns a `CalculationError` otherwise.
    pub fn new(insertions: &'static [i64], tc_years: &'static [i64]) -> AltTimeResult<Self> {
        if !is_strictly_ascending(insertions) {
            return Err(AltTimeError::calculation_error(
                "leap second registry",
                "historical insertions must be strictly ascending",
            ));
        }
        if !is_strictly_ascending(tc_years) {
            return Err(AltTimeError::calculation_error(
                "leap second registry",
                "synthetic leap years must be strictly ascending",
            ));
        }
        if let Some(&first) = tc_years.first() {
            if first < 0 {
                return Err(AltTimeError::calculation_error(
                    "leap second registry",
                    &format!("synthetic leap year {} is before TC year 0", first),
                ));
            }
        }
        Ok(Self {
            insertions,
            tc_years,
        })
    }

    /// The built-in registry shared by the whole process.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    pub fn insertions(&self) -> &'static [i64] {
        self.insertions
    }

    pub fn tc_years(&self) -> &'static [i64] {
        self.tc_years
    }

    /// Returns `true` if `unix` is a registered insertion instant.
    pub fn is_insertion(&self, unix: i64) -> bool {
        self.insertions.binary_search(&unix).is_ok()
    }

    /// Number of insertions strictly before `unix`.
    pub fn count_before(&self, unix: i64) -> i64 {
        self.insertions.partition_point(|&insertion| insertion < unix) as i64
    }

    /// Number of insertions at or before `unix`.
    ///
    /// An insertion "occurs" at its registered instant: the instant itself is
    /// affected, the second before it is not.
    pub fn count_at_or_before(&self, unix: i64) -> i64 {
        self.insertions
            .partition_point(|&insertion| insertion <= unix) as i64
    }

    pub fn min_tc_year(&self) -> Option<i64> {
        self.tc_years.first().copied()
    }

    pub fn max_tc_year(&self) -> Option<i64> {
        self.tc_years.last().copied()
    }

    /// Synthetic leap seconds carried by TC `year`.
    ///
    /// Zero outside `[min_tc_year, max_tc_year]`. With a `year_base`, years
    /// after the base carry none either.
    pub fn synthetic_leap_seconds(&self, year: i64, year_base: Option<i64>) -> i64 {
        let (Some(min), Some(max)) = (self.min_tc_year(), self.max_tc_year()) else {
            return 0;
        };
        if year < min || year > max {
            return 0;
        }
        if matches!(year_base, Some(base) if base < year) {
            return 0;
        }
        if self.tc_years.binary_search(&year).is_ok() {
            1
        } else {
            0
        }
    }

    /// First TC year at or after which no synthetic leap second can occur,
    /// rounded up to a whole 128-year cycle.
    ///
    /// The year search walks year-by-year below this bound and switches to
    /// closed-form cycle arithmetic above it.
    pub fn walk_limit(&self) -> i64 {
        match self.max_tc_year() {
            Some(max) if max >= 0 => ceil_div(max + 1, TC_YEARS_PER_CYCLE) * TC_YEARS_PER_CYCLE,
            _ => 0,
        }
    }
}

impl Default for LeapSecondRegistry {
    fn default() -> Self {
        STANDARD
    }
}

fn is_strictly_ascending(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}
