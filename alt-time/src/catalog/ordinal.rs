use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// `YYYY.DDD.HHMMSS` in the caller's offset, with a 1-based day of year.
pub fn ordinal_date<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String {
    let local = datetime.naive_local();
    format!(
        "{:04}.{:03}.{:02}{:02}{:02}",
        local.year(),
        local.ordinal(),
        local.hour(),
        local.minute(),
        local.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_day_sixty_four() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(ordinal_date(&dt), "2025.064.070809");
    }

    #[test]
    fn test_uses_local_fields() {
        let offset = FixedOffset::west_opt(8 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(ordinal_date(&dt), "2024.366.235959");
    }

    #[test]
    fn test_short_years_are_padded() {
        let dt = Utc.with_ymd_and_hms(476, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(ordinal_date(&dt), "0476.001.000000");
    }
}
