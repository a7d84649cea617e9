//! Property tests for the TC engine.
//!
//! The linear year walk is the reference; everything else must agree with it.

use alt_time::tc::layout::{is_tc_leap_year, year_length, year_of, year_of_linear, year_start};
use alt_time::tc::{compose, decompose, instant_to_tc, tc_to_instant, LayoutOptions};
use alt_time::{Instant, LeapSecondRegistry, TcTimestamp};
use proptest::prelude::*;

/// About ±31,000 TC years around the epoch.
const SPAN: i64 = 1_000_000_000_000;

fn registry() -> &'static LeapSecondRegistry {
    LeapSecondRegistry::standard()
}

fn arb_year_base() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![Just(None), (-5i64..60).prop_map(Some)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every TC second maps to an instant that maps back to it.
    #[test]
    fn prop_tc_round_trip(seconds in -SPAN..SPAN, nanos in 0u32..1_000_000_000) {
        let tc = TcTimestamp::new(seconds, nanos);
        let instant = tc_to_instant(tc, registry()).unwrap();
        prop_assert_eq!(instant_to_tc(&instant, registry()).unwrap(), tc);
    }

    /// Every unflagged instant survives the trip through the TC timebase.
    #[test]
    fn prop_instant_round_trip(unix in -SPAN..SPAN) {
        let instant = Instant::from_unix(unix);
        let tc = instant_to_tc(&instant, registry()).unwrap();
        prop_assert_eq!(tc_to_instant(tc, registry()).unwrap(), instant);
    }

    /// Later instants never map to earlier TC seconds.
    #[test]
    fn prop_monotonic(a in -SPAN..SPAN, step in 1i64..100_000_000) {
        let b = a + step;
        let tc_a = instant_to_tc(&Instant::from_unix(a), registry()).unwrap();
        let tc_b = instant_to_tc(&Instant::from_unix(b), registry()).unwrap();
        prop_assert!(tc_a < tc_b);
    }

    /// The flagged leap second sits strictly between its neighbours.
    #[test]
    fn prop_leap_second_boundary(index in 0usize..27) {
        let insertion = registry().insertions()[index];
        let tc = |instant: Instant| instant_to_tc(&instant, registry()).unwrap().seconds();

        let before = tc(Instant::from_unix(insertion - 1));
        let flagged_before = tc(Instant::from_unix(insertion - 1).with_leap_second(true));
        let flagged_at = tc(Instant::from_unix(insertion).with_leap_second(true));
        let after = tc(Instant::from_unix(insertion));

        prop_assert_eq!(flagged_before, flagged_at);
        prop_assert_eq!(flagged_at - before, 1);
        prop_assert_eq!(after - flagged_at, 1);
    }

    /// The accelerated year search agrees with the linear walk.
    #[test]
    fn prop_year_search_matches_linear(seconds in -SPAN..SPAN, year_base in arb_year_base()) {
        let fast = year_of(seconds, registry(), year_base).unwrap();
        prop_assert_eq!(fast, year_of_linear(seconds, registry(), year_base));
    }

    /// Decomposing and recomposing returns the same timestamp.
    #[test]
    fn prop_decompose_compose_idempotent(
        seconds in -SPAN..SPAN,
        nanos in 0u32..1_000_000_000,
        year_base in arb_year_base(),
        offset in -1_000_000i64..1_000_000,
    ) {
        let tc = TcTimestamp::new(seconds, nanos);
        let options = LayoutOptions { year_base, offset };
        let date = decompose(tc, registry(), options).unwrap();

        prop_assert!(date.month <= 13);
        prop_assert!(date.day < 28);
        prop_assert!(date.hour < 24 && date.minute < 60 && date.second < 60);
        prop_assert_eq!(compose(&date, registry()).unwrap(), tc);
    }

    /// Year starts are consistent with year lengths.
    #[test]
    fn prop_year_start_steps_by_length(year in -20_000i64..20_000, year_base in arb_year_base()) {
        let start = year_start(year, registry(), year_base).unwrap();
        let next = year_start(year + 1, registry(), year_base).unwrap();
        prop_assert_eq!(next - start, year_length(year, registry(), year_base));
    }

    /// Quadrennial leap day, suppressed on multiples of 128.
    #[test]
    fn prop_leap_day_rule(group in -10_000i64..10_000) {
        let leap_year = group * 4;
        let common_year = leap_year + 1;
        let difference = year_length(leap_year, registry(), Some(-1))
            - year_length(common_year, registry(), Some(-1));
        if leap_year % 128 == 0 {
            prop_assert_eq!(difference, 0);
            prop_assert!(!is_tc_leap_year(leap_year));
        } else {
            prop_assert_eq!(difference, 86_400);
        }
    }
}
