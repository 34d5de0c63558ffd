//! Look-back window for the `since` query parameter.

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

/// Default look-back, in days.
pub const DEFAULT_SINCE_DAYS: u32 = 1;

/// Returns `now - days` formatted as RFC 3339 with second precision.
///
/// Returns `None` when the window reaches outside the representable date
/// range.
pub fn since_timestamp(now: DateTime<Utc>, days: u32) -> Option<String> {
    let window = TimeDelta::try_days(i64::from(days))?;
    let since = now.checked_sub_signed(window)?;
    Some(since.to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use test_case::test_case;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap()
    }

    #[test_case(0, "2026-10-15T09:30:00Z" ; "zero days is now")]
    #[test_case(1, "2026-10-14T09:30:00Z" ; "default window")]
    #[test_case(15, "2026-09-30T09:30:00Z" ; "crosses month boundary")]
    #[test_case(366, "2025-10-14T09:30:00Z" ; "more than a year")]
    fn test_since_timestamp(days: u32, expected: &str) {
        assert_eq!(since_timestamp(fixed_now(), days).as_deref(), Some(expected));
    }

    #[test]
    fn test_subsecond_precision_dropped() {
        let now = fixed_now() + TimeDelta::milliseconds(750);
        assert_eq!(
            since_timestamp(now, 1).as_deref(),
            Some("2026-10-14T09:30:00Z")
        );
    }

    #[test]
    fn test_out_of_range_window() {
        assert_eq!(since_timestamp(fixed_now(), u32::MAX), None);
    }

    proptest! {
        #[test]
        fn since_is_exactly_days_before_now(days in 0u32..100_000) {
            let now = fixed_now();
            let formatted = since_timestamp(now, days).unwrap();
            let parsed = DateTime::parse_from_rfc3339(&formatted).unwrap();

            prop_assert_eq!(now - parsed.with_timezone(&Utc), TimeDelta::days(i64::from(days)));
        }
    }
}
