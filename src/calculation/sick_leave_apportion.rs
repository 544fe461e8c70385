//! Sick-leave apportionment against a payroll period.
//!
//! A span is clipped to the period and its days are split between the
//! employer period and NAV at the takeover date.

use chrono::NaiveDate;

use crate::models::{PayrollPeriod, SickLeaveApportionment, SickLeaveSpan};

/// Resolves the logical last day of a span.
///
/// Sources are tried in order and the first present one wins: actual return
/// date, declared end date, expected return date. An open span runs to the end
/// of the period.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_span_end;
/// use payroll_engine::models::{PayrollPeriod, SickLeaveSpan};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let period = PayrollPeriod::new(d(1), d(31)).unwrap();
///
/// let span = SickLeaveSpan::new("emp", d(3)).ending(d(12)).returned(d(9));
/// assert_eq!(resolve_span_end(&span, &period), d(9));
///
/// let open = SickLeaveSpan::new("emp", d(3));
/// assert_eq!(resolve_span_end(&open, &period), d(31));
/// ```
pub fn resolve_span_end(span: &SickLeaveSpan, period: &PayrollPeriod) -> NaiveDate {
    [
        span.actual_return_date,
        span.end_date,
        span.expected_return_date,
    ]
    .into_iter()
    .flatten()
    .next()
    .unwrap_or(period.end_date)
}

/// Splits a span's days inside `period` between the employer and NAV.
///
/// 1. The span is clipped to the period using [`resolve_span_end`].
/// 2. Days are counted inclusively; a span outside the period gets all zeros.
/// 3. With a takeover date, days before it belong to the employer and days
///    from it on belong to NAV. Without one, `employer_period_completed`
///    moves every day to NAV.
///
/// `employer_days + nav_days == total_days` for every result.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::apportion_sick_leave;
/// use payroll_engine::models::{PayrollPeriod, SickLeaveSpan};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let period = PayrollPeriod::new(d(1), d(31)).unwrap();
/// let span = SickLeaveSpan::new("emp", d(1)).ending(d(20)).nav_from(d(10));
///
/// let result = apportion_sick_leave(&span, &period);
/// assert_eq!(result.total_days, 20);
/// assert_eq!(result.employer_days, 9);
/// assert_eq!(result.nav_days, 11);
/// ```
pub fn apportion_sick_leave(span: &SickLeaveSpan, period: &PayrollPeriod) -> SickLeaveApportionment {
    let effective_start = span.start_date.max(period.start_date);
    let effective_end = resolve_span_end(span, period).min(period.end_date);

    if effective_start > effective_end {
        return SickLeaveApportionment {
            total_days: 0,
            employer_days: 0,
            nav_days: 0,
            effective_start,
            effective_end,
        };
    }

    let total_days = (effective_end - effective_start).num_days() + 1;

    let employer_days = match span.nav_takeover_date {
        Some(takeover) if takeover > effective_end => total_days,
        Some(takeover) if takeover <= effective_start => 0,
        Some(takeover) => (takeover - effective_start).num_days(),
        None if span.employer_period_completed => 0,
        None => total_days,
    };

    SickLeaveApportionment {
        total_days,
        employer_days,
        nav_days: total_days - employer_days,
        effective_start,
        effective_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn january() -> PayrollPeriod {
        PayrollPeriod::new(make_date("2024-01-01"), make_date("2024-01-31")).unwrap()
    }

    /// SL-001: split at the NAV takeover date
    #[test]
    fn test_split_at_takeover() {
        let span = SickLeaveSpan::new("emp", make_date("2024-01-01"))
            .ending(make_date("2024-01-20"))
            .nav_from(make_date("2024-01-10"));
        let result = apportion_sick_leave(&span, &january());

        assert_eq!(result.total_days, 20);
        assert_eq!(result.employer_days, 9);
        assert_eq!(result.nav_days, 11);
        assert_eq!(result.effective_start, make_date("2024-01-01"));
        assert_eq!(result.effective_end, make_date("2024-01-20"));
    }

    /// SL-002: span ending before the period contributes nothing
    #[test]
    fn test_span_before_period_contributes_nothing() {
        let span = SickLeaveSpan::new("emp", make_date("2023-12-01"))
            .ending(make_date("2023-12-20"));
        let result = apportion_sick_leave(&span, &january());

        assert_eq!(result.total_days, 0);
        assert_eq!(result.employer_days, 0);
        assert_eq!(result.nav_days, 0);
        assert!(!result.contributes());
    }

    #[test]
    fn test_span_after_period_contributes_nothing() {
        let span = SickLeaveSpan::new("emp", make_date("2024-02-05"));
        let result = apportion_sick_leave(&span, &january());
        assert!(!result.contributes());
    }

    #[test]
    fn test_span_is_clipped_to_period() {
        let span = SickLeaveSpan::new("emp", make_date("2023-12-15"))
            .ending(make_date("2024-02-15"));
        let result = apportion_sick_leave(&span, &january());

        assert_eq!(result.total_days, 31);
        assert_eq!(result.effective_start, make_date("2024-01-01"));
        assert_eq!(result.effective_end, make_date("2024-01-31"));
    }

    #[test]
    fn test_single_day_span() {
        let span = SickLeaveSpan::new("emp", make_date("2024-01-15"))
            .ending(make_date("2024-01-15"));
        assert_eq!(apportion_sick_leave(&span, &january()).total_days, 1);
    }

    #[test]
    fn test_open_span_runs_to_period_end() {
        let span = SickLeaveSpan::new("emp", make_date("2024-01-22"));
        let result = apportion_sick_leave(&span, &january());
        assert_eq!(result.total_days, 10);
        assert_eq!(result.employer_days, 10);
    }

    #[test]
    fn test_end_date_precedence() {
        let base = SickLeaveSpan::new("emp", make_date("2024-01-01"));
        let period = january();

        let all = base
            .clone()
            .returned(make_date("2024-01-05"))
            .ending(make_date("2024-01-10"))
            .expected_back(make_date("2024-01-15"));
        assert_eq!(resolve_span_end(&all, &period), make_date("2024-01-05"));

        let declared = base
            .clone()
            .ending(make_date("2024-01-10"))
            .expected_back(make_date("2024-01-15"));
        assert_eq!(resolve_span_end(&declared, &period), make_date("2024-01-10"));

        let expected = base.clone().expected_back(make_date("2024-01-15"));
        assert_eq!(resolve_span_end(&expected, &period), make_date("2024-01-15"));

        assert_eq!(resolve_span_end(&base, &period), make_date("2024-01-31"));
    }

    #[test]
    fn test_resolved_end_may_lie_beyond_period() {
        let span = SickLeaveSpan::new("emp", make_date("2024-01-01"))
            .expected_back(make_date("2024-03-01"));
        assert_eq!(resolve_span_end(&span, &january()), make_date("2024-03-01"));
    }

    #[test]
    fn test_takeover_after_window_is_all_employer() {
        let span = SickLeaveSpan::new("emp", make_date("2024-01-01"))
            .ending(make_date("2024-01-10"))
            .nav_from(make_date("2024-01-11"));
        let result = apportion_sick_leave(&span, &january());
        assert_eq!((result.employer_days, result.nav_days), (10, 0));
    }

    #[test]
    fn test_takeover_on_window_start_is_all_nav() {
        let span = SickLeaveSpan::new("emp", make_date("2023-12-01"))
            .ending(make_date("2024-01-10"))
            .nav_from(make_date("2024-01-01"));
        let result = apportion_sick_leave(&span, &january());
        assert_eq!((result.employer_days, result.nav_days), (0, 10));
    }

    #[test]
    fn test_takeover_on_window_end_leaves_one_nav_day() {
        let span = SickLeaveSpan::new("emp", make_date("2024-01-01"))
            .ending(make_date("2024-01-10"))
            .nav_from(make_date("2024-01-10"));
        let result = apportion_sick_leave(&span, &january());
        assert_eq!((result.employer_days, result.nav_days), (9, 1));
    }

    #[test]
    fn test_completed_employer_period_without_takeover_is_all_nav() {
        let span = SickLeaveSpan::new("emp", make_date("2024-01-05"))
            .ending(make_date("2024-01-14"))
            .employer_period_done();
        let result = apportion_sick_leave(&span, &january());
        assert_eq!((result.employer_days, result.nav_days), (0, 10));
    }

    #[test]
    fn test_takeover_date_wins_over_completed_flag() {
        let span = SickLeaveSpan::new("emp", make_date("2024-01-01"))
            .ending(make_date("2024-01-20"))
            .nav_from(make_date("2024-01-10"))
            .employer_period_done();
        let result = apportion_sick_leave(&span, &january());
        assert_eq!(result.employer_days, 9);
    }

    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (0i64..120).prop_map(|offset| make_date("2023-12-01") + chrono::Duration::days(offset))
    }

    proptest! {
        #[test]
        fn prop_split_is_exhaustive_and_bounded(
            start in date_strategy(),
            end in proptest::option::of(date_strategy()),
            takeover in proptest::option::of(date_strategy()),
            completed in any::<bool>(),
        ) {
            let mut span = SickLeaveSpan::new("emp", start);
            span.end_date = end;
            span.nav_takeover_date = takeover;
            span.employer_period_completed = completed;

            let period = january();
            let result = apportion_sick_leave(&span, &period);

            prop_assert_eq!(result.employer_days + result.nav_days, result.total_days);
            prop_assert!(result.employer_days >= 0);
            prop_assert!(result.nav_days >= 0);
            prop_assert!(result.total_days <= period.days());
            if result.contributes() {
                prop_assert!(period.contains_date(result.effective_start));
                prop_assert!(period.contains_date(result.effective_end));
                prop_assert_eq!(
                    result.total_days,
                    (result.effective_end - result.effective_start).num_days() + 1
                );
            }
        }
    }
}
