pub const SECONDS_PER_MINUTE: i64 = 60;

pub const SECONDS_PER_HOUR: i64 = 3_600;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const HOURS_PER_DAY: i64 = 24;

pub const NANOSECONDS_PER_SECOND: u32 = 1_000_000_000;

/// Days in a common (non-leap) year of any 365-day calendar.
pub const DAYS_PER_COMMON_YEAR: i64 = 365;
