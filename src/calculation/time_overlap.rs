//! Time-of-day overlap calculation.
//!
//! This module measures how much of a shift falls inside a supplement rule's
//! time window. Both intervals are times of day and either may wrap past
//! midnight.

use rust_decimal::Decimal;

use crate::models::{MINUTES_PER_DAY, TimeWindow};

/// Minutes per hour as a Decimal.
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Length of the intersection of `[a_start, a_end)` and `[b_start, b_end)`.
fn linear_overlap(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> i64 {
    (a_end.min(b_end) - a_start.max(b_start)).max(0)
}

/// Returns the overlap between a shift and a rule window in minutes.
///
/// The shift end is moved to the next day when it precedes the start. A
/// wrapping rule window is split into `[start, 1440)` and `[0, end)`, and the
/// part of an overnight shift after midnight is matched against
/// `[1440, 1440 + end)`. A non-wrapping rule window is compared directly.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::overlap_minutes;
/// use payroll_engine::models::TimeWindow;
///
/// let shift = TimeWindow::parse("22:00", "06:00").unwrap();
/// let night = TimeWindow::parse("23:00", "06:00").unwrap();
/// assert_eq!(overlap_minutes(shift, night), 420);
/// ```
pub fn overlap_minutes(shift: TimeWindow, rule: TimeWindow) -> i64 {
    let shift_start = shift.start_minutes();
    let shift_end = shift_start + shift.duration_minutes();
    let rule_start = rule.start_minutes();
    let rule_end = rule.end_minutes();

    if rule.wraps_midnight() {
        let before_midnight = linear_overlap(shift_start, shift_end, rule_start, MINUTES_PER_DAY);
        let early_morning = linear_overlap(shift_start, shift_end, 0, rule_end);
        let next_morning = linear_overlap(
            shift_start,
            shift_end,
            MINUTES_PER_DAY,
            MINUTES_PER_DAY + rule_end,
        );
        before_midnight + early_morning + next_morning
    } else {
        linear_overlap(shift_start, shift_end, rule_start, rule_end)
    }
}

/// Returns the overlap between a shift and a rule window in hours.
///
/// The result is never negative. A rule window that contains the whole shift
/// yields the shift's full length; disjoint windows yield zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overlap_hours;
/// use payroll_engine::models::TimeWindow;
/// use rust_decimal::Decimal;
///
/// let shift = TimeWindow::parse("22:00", "05:00").unwrap();
/// let rule = TimeWindow::parse("21:00", "07:00").unwrap();
/// assert_eq!(calculate_overlap_hours(shift, rule), Decimal::new(7, 0));
/// ```
pub fn calculate_overlap_hours(shift: TimeWindow, rule: TimeWindow) -> Decimal {
    Decimal::from(overlap_minutes(shift, rule)) / MINUTES_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow::parse(start, end).unwrap()
    }

    #[test]
    fn test_overnight_shift_against_wrapping_night_window() {
        let hours = calculate_overlap_hours(window("22:00", "06:00"), window("23:00", "06:00"));
        assert_eq!(hours, dec("7.0"));
    }

    #[test]
    fn test_wrapping_rule_fully_contains_shift() {
        let hours = calculate_overlap_hours(window("22:00", "05:00"), window("21:00", "07:00"));
        assert_eq!(hours, dec("7.0"));
    }

    #[test]
    fn test_day_shift_against_evening_window() {
        let hours = calculate_overlap_hours(window("14:00", "22:00"), window("17:00", "21:00"));
        assert_eq!(hours, dec("4"));
    }

    #[test]
    fn test_disjoint_intervals_yield_zero() {
        let hours = calculate_overlap_hours(window("08:00", "16:00"), window("17:00", "21:00"));
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_adjacent_intervals_yield_zero() {
        let hours = calculate_overlap_hours(window("08:00", "17:00"), window("17:00", "21:00"));
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_early_morning_day_shift_against_wrapping_window() {
        // 05:00-13:00 touches the tail of a 22:00-06:00 night window
        let hours = calculate_overlap_hours(window("05:00", "13:00"), window("22:00", "06:00"));
        assert_eq!(hours, dec("1"));
    }

    #[test]
    fn test_overnight_shift_against_non_wrapping_evening_window() {
        let hours = calculate_overlap_hours(window("20:00", "02:00"), window("17:00", "22:00"));
        assert_eq!(hours, dec("2"));
    }

    #[test]
    fn test_non_wrapping_window_is_not_matched_on_next_day() {
        // A plain window is compared on the shift's first day only.
        let minutes = overlap_minutes(window("23:00", "08:00"), window("06:00", "09:00"));
        assert_eq!(minutes, 0);
    }

    #[test]
    fn test_partial_hours_are_fractional() {
        let hours = calculate_overlap_hours(window("20:30", "23:15"), window("21:00", "23:00"));
        assert_eq!(hours, dec("2"));

        let hours = calculate_overlap_hours(window("22:45", "01:00"), window("23:00", "06:00"));
        assert_eq!(hours, dec("2"));

        let hours = calculate_overlap_hours(window("20:00", "21:30"), window("21:00", "23:00"));
        assert_eq!(hours, dec("0.5"));
    }

    #[test]
    fn test_empty_rule_window_yields_zero() {
        let minutes = overlap_minutes(window("08:00", "16:00"), window("12:00", "12:00"));
        assert_eq!(minutes, 0);
    }

    fn any_window() -> impl Strategy<Value = TimeWindow> {
        (0u32..24, 0u32..60, 0u32..24, 0u32..60).prop_map(|(sh, sm, eh, em)| {
            TimeWindow::parse(&format!("{sh:02}:{sm:02}"), &format!("{eh:02}:{em:02}")).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_overlap_bounded_by_shift_length(shift in any_window(), rule in any_window()) {
            let minutes = overlap_minutes(shift, rule);
            prop_assert!(minutes >= 0);
            prop_assert!(minutes <= shift.duration_minutes());
        }

        #[test]
        fn prop_overlap_is_deterministic(shift in any_window(), rule in any_window()) {
            prop_assert_eq!(
                calculate_overlap_hours(shift, rule),
                calculate_overlap_hours(shift, rule)
            );
        }
    }
}
