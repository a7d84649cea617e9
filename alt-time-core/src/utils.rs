//! Small integer and text helpers shared by the calendar modules.
//!
//! # Integer Division
//!
//! | Function | Rounds toward | Example |
//! |----------|---------------|---------|
//! | `i64::div_euclid` (std) | −∞ for positive divisors | `-7 / 2 → -4` |
//! | [`ceil_div`] | +∞ | `-7 / 2 → -3`, `7 / 2 → 4` |
//!
//! # Text
//!
//! [`english_ordinal`] renders day numbers as `1st`, `2nd`, `11th`, `23rd`.
//! [`fraction_digits`] renders a sub-second nanosecond count as its significant
//! decimal digits, the way calendar strings print fractional seconds.

use crate::constants::NANOSECONDS_PER_SECOND;

/// Integer division rounding toward positive infinity.
///
/// `divisor` must be positive.
///
/// ```
/// use alt_time_core::utils::ceil_div;
///
/// assert_eq!(ceil_div(2025, 1000), 3);
/// assert_eq!(ceil_div(2000, 1000), 2);
/// assert_eq!(ceil_div(-1500, 1000), -1);
/// ```
#[inline]
pub fn ceil_div(value: i64, divisor: i64) -> i64 {
    -((-value).div_euclid(divisor))
}

/// English ordinal suffix for a day number: `st`, `nd`, `rd` or `th`.
///
/// 11, 12 and 13 (and 111, 112, ...) take `th`.
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Renders `n` followed by its English ordinal suffix.
///
/// ```
/// use alt_time_core::utils::english_ordinal;
///
/// assert_eq!(english_ordinal(1), "1st");
/// assert_eq!(english_ordinal(12), "12th");
/// assert_eq!(english_ordinal(22), "22nd");
/// ```
pub fn english_ordinal(n: u32) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

/// Significant decimal digits of a sub-second nanosecond count.
///
/// Trailing zeros are dropped; zero yields `None`. Values of a full second or
/// more are reduced modulo one second.
///
/// ```
/// use alt_time_core::utils::fraction_digits;
///
/// assert_eq!(fraction_digits(500_000_000).as_deref(), Some("5"));
/// assert_eq!(fraction_digits(1_250_000).as_deref(), Some("00125"));
/// assert_eq!(fraction_digits(0), None);
/// ```
pub fn fraction_digits(nanos: u32) -> Option<String> {
    let nanos = nanos % NANOSECONDS_PER_SECOND;
    if nanos == 0 {
        return None;
    }
    let digits = format!("{:09}", nanos);
    Some(digits.trim_end_matches('0').to_string())
}
