use alt_time_core::constants::{DAYS_PER_COMMON_YEAR, SECONDS_PER_DAY};

/// Seconds from the TC epoch (1969-12-22T00:00:00Z) to the Unix epoch.
///
/// Before leap seconds are counted, `tc = unix + TC_EPOCH_OFFSET_SECONDS`
/// and `unix = tc - TC_EPOCH_OFFSET_SECONDS`.
pub const TC_EPOCH_OFFSET_SECONDS: i64 = 10 * SECONDS_PER_DAY;

/// Seconds in a 28-day TC month.
pub const SECONDS_PER_TC_MONTH: i64 = 28 * SECONDS_PER_DAY;

/// Seconds in a common 365-day TC year, before synthetic leap seconds.
pub const SECONDS_PER_TC_YEAR: i64 = DAYS_PER_COMMON_YEAR * SECONDS_PER_DAY;

/// Seconds in four TC years, one of which carries a leap day.
pub const SECONDS_PER_TC_QUAD: i64 = 4 * SECONDS_PER_TC_YEAR + SECONDS_PER_DAY;

/// TC years per supercycle. Multiples of this are exempt from the leap day.
pub const TC_YEARS_PER_CYCLE: i64 = 128;

/// Seconds in a 128-year TC supercycle without synthetic leap seconds.
///
/// 128 × 365 days plus 31 leap days (years 4, 8, ..., 124; year 0 of the cycle is exempt).
pub const SECONDS_PER_TC_CYCLE: i64 = (TC_YEARS_PER_CYCLE * DAYS_PER_COMMON_YEAR + 31) * SECONDS_PER_DAY;

/// Historical UTC leap-second insertion instants as Unix seconds, ascending.
///
/// Each entry is the Unix second at which the UTC day following a `23:59:60`
/// begins, i.e. the instant a `…T23:59:60Z` string normalizes to.
pub const UTC_LEAP_SECONDS: [i64; 27] = [
    78_796_800,    // 1972-06-30T23:59:60Z
    94_694_400,    // 1972-12-31T23:59:60Z
    126_230_400,   // 1973-12-31T23:59:60Z
    157_766_400,   // 1974-12-31T23:59:60Z
    189_302_400,   // 1975-12-31T23:59:60Z
    220_924_800,   // 1976-12-31T23:59:60Z
    252_460_800,   // 1977-12-31T23:59:60Z
    283_996_800,   // 1978-12-31T23:59:60Z
    315_532_800,   // 1979-12-31T23:59:60Z
    362_793_600,   // 1981-06-30T23:59:60Z
    394_329_600,   // 1982-06-30T23:59:60Z
    425_865_600,   // 1983-06-30T23:59:60Z
    489_024_000,   // 1985-06-30T23:59:60Z
    567_993_600,   // 1987-12-31T23:59:60Z
    631_152_000,   // 1989-12-31T23:59:60Z
    662_688_000,   // 1990-12-31T23:59:60Z
    709_948_800,   // 1992-06-30T23:59:60Z
    741_484_800,   // 1993-06-30T23:59:60Z
    773_020_800,   // 1994-06-30T23:59:60Z
    820_454_400,   // 1995-12-31T23:59:60Z
    867_715_200,   // 1997-06-30T23:59:60Z
    915_148_800,   // 1998-12-31T23:59:60Z
    1_136_073_600, // 2005-12-31T23:59:60Z
    1_230_768_000, // 2008-12-31T23:59:60Z
    1_341_100_800, // 2012-06-30T23:59:60Z
    1_435_708_800, // 2015-06-30T23:59:60Z
    1_483_228_800, // 2016-12-31T23:59:60Z
];

/// TC calendar years that each carry one synthetic leap second, ascending.
///
/// One entry per historical insertion: the TC year in which that insertion
/// falls. The year ends one second later, so from the following year on the
/// TC time of day matches the UTC time of day again.
pub const TC_LEAP_SECOND_YEARS: [i64; 27] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 18, 20, 21, 22, 23, 24, 26, 27, 29, 36, 39, 42,
    45, 47,
];

/// Zero-padding width for the padded TC date rendering.
pub const TC_PAD_WIDTH: usize = 2;

/// Base year of the stardate scale (stardate 0 begins on 2323-01-01).
pub const STARDATE_BASE_YEAR: i32 = 2323;

/// Hours-to-year-fraction constant of the Imperial dating system (1000 / 8766 h).
pub const IMPERIAL_MAKR_CONSTANT: f64 = 0.114_079_55;

/// Offset from the Gregorian year to the Dale Reckoning year.
pub const DALE_RECKONING_YEAR_OFFSET: i32 = 524;
