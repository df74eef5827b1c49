use proptest::prelude::*;

use super::*;

const NOW: u64 = 1_700_000_000;
const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const YEAR: u64 = 365 * DAY;

fn ago(elapsed: u64) -> String {
    format_seconds_since_at(NOW as f64, NOW - elapsed)
}

#[test_log::test]
fn under_a_minute_is_one_minute() {
    assert_eq!(ago(0), "1 minute");
    assert_eq!(ago(59), "1 minute");
}

#[test_log::test]
fn singular_and_plural() {
    assert_eq!(ago(MINUTE), "1 minute");
    assert_eq!(ago(2 * MINUTE), "2 minutes");
    assert_eq!(ago(HOUR), "1 hour");
    assert_eq!(ago(DAY + HOUR), "1 day");
    assert_eq!(ago(3 * DAY), "3 days");
    assert_eq!(ago(YEAR), "1 year");
    assert_eq!(ago(10 * YEAR), "10 years");
}

#[test_log::test]
fn largest_positive_unit_wins() {
    // 121 minutes, 2 hours, 0 days
    assert_eq!(ago(7265), "2 hours");
    assert_eq!(
        RelativeTime::between(NOW as f64, (NOW - 7265) as f64),
        RelativeTime {
            unit: TimeUnit::Hour,
            value: 2
        }
    );
}

#[test_log::test]
fn boundaries_prefer_larger_unit() {
    assert_eq!(ago(HOUR - 1), "59 minutes");
    assert_eq!(ago(DAY - 1), "23 hours");
    assert_eq!(ago(DAY), "1 day");
    assert_eq!(ago(YEAR - 1), "364 days");
}

#[test_log::test]
fn years_have_no_leap_days() {
    assert_eq!(ago(366 * DAY), "1 year");
    assert_eq!(ago(4 * YEAR + DAY), "4 years");
}

#[test_log::test]
fn future_is_one_minute() {
    assert_eq!(format_seconds_since_at(NOW as f64, NOW + 1), "1 minute");
    assert_eq!(format_seconds_since_at(NOW as f64, NOW + 10 * YEAR), "1 minute");
}

#[test_log::test]
fn fractional_now_is_floored() {
    assert_eq!(format_seconds_since_at(NOW as f64 + 59.9, NOW), "1 minute");
    assert_eq!(format_seconds_since_at(NOW as f64 + 119.9, NOW), "1 minute");
    assert_eq!(format_seconds_since_at(NOW as f64 + 120.0, NOW), "2 minutes");
}

#[test_log::test]
fn non_finite_now_is_one_minute() {
    assert_eq!(format_seconds_since_at(f64::NAN, NOW), "1 minute");
    assert_eq!(RelativeTime::between(f64::INFINITY, 0.0).unit, TimeUnit::Year);
}

#[test_log::test]
fn epoch_is_decades_ago() {
    let formatted = format_seconds_since(0);
    assert!(formatted.ends_with(" years"), "{formatted}");
}

#[test_log::test]
fn fmt_option_shows_dash() {
    let some = Some(3);
    let none: Option<u32> = None;
    assert_eq!(some.fmt_option().to_string(), "3");
    assert_eq!(none.fmt_option().to_string(), "-");
}

proptest! {
    #[test]
    fn minutes_range(elapsed in MINUTE..HOUR) {
        let value = elapsed / MINUTE;
        let expected = if value == 1 {
            "1 minute".to_string()
        } else {
            format!("{value} minutes")
        };
        prop_assert_eq!(ago(elapsed), expected);
    }

    #[test]
    fn hours_range(elapsed in HOUR..DAY) {
        let rel = RelativeTime::between(NOW as f64, (NOW - elapsed) as f64);
        prop_assert_eq!(rel.unit, TimeUnit::Hour);
        prop_assert_eq!(rel.value, (elapsed / HOUR) as i64);
    }

    #[test]
    fn days_range(elapsed in DAY..YEAR) {
        let rel = RelativeTime::between(NOW as f64, (NOW - elapsed) as f64);
        prop_assert_eq!(rel.unit, TimeUnit::Day);
        prop_assert_eq!(rel.value, (elapsed / DAY) as i64);
    }

    #[test]
    fn years_range(elapsed in YEAR..NOW) {
        let rel = RelativeTime::between(NOW as f64, (NOW - elapsed) as f64);
        prop_assert_eq!(rel.unit, TimeUnit::Year);
        prop_assert_eq!(rel.value, (elapsed / DAY / 365) as i64);
    }

    #[test]
    fn future_range(ahead in 0u64..100 * YEAR) {
        prop_assert_eq!(format_seconds_since_at(NOW as f64, NOW + ahead), "1 minute");
    }

    #[test]
    fn plural_iff_not_one(elapsed in 0u64..NOW) {
        let rel = RelativeTime::between(NOW as f64, (NOW - elapsed) as f64);
        prop_assert_eq!(rel.to_string().ends_with('s'), rel.value != 1);
    }
}
