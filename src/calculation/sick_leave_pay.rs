//! Conversion of employer-paid sick days to hours and money.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{SickLeavePay, SickLeavePayrollSummary};

/// Standard working day of 7.5 hours.
pub const DEFAULT_HOURS_PER_DAY: Decimal = Decimal::from_parts(75, 0, 0, false, 1);

/// Converts employer-paid days to payable hours and an amount.
///
/// `payable_hours = employer_days × hours_per_day × percentage / 100` and
/// `amount = payable_hours × hourly_rate`. NAV days are never paid here.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when the hours or the amount
/// overflow.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_sick_leave_pay, DEFAULT_HOURS_PER_DAY};
/// use rust_decimal::Decimal;
///
/// let pay = calculate_sick_leave_pay(
///     9,
///     Decimal::new(100, 0),
///     Decimal::new(200, 0),
///     DEFAULT_HOURS_PER_DAY,
/// )
/// .unwrap();
/// assert_eq!(pay.payable_hours, Decimal::new(675, 1));
/// assert_eq!(pay.amount, Decimal::new(13500, 0));
/// ```
pub fn calculate_sick_leave_pay(
    employer_days: i64,
    percentage: Decimal,
    hourly_rate: Decimal,
    hours_per_day: Decimal,
) -> EngineResult<SickLeavePay> {
    let payable_hours = Decimal::from(employer_days)
        .checked_mul(hours_per_day)
        .and_then(|hours| hours.checked_mul(percentage))
        .and_then(|hours| hours.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| EngineError::overflow("sick-leave payable hours"))?;
    let amount = payable_hours
        .checked_mul(hourly_rate)
        .ok_or_else(|| EngineError::overflow("sick-leave pay"))?;
    Ok(SickLeavePay {
        payable_hours,
        amount,
    })
}

/// Pay for a summary's employer days at its averaged percentage.
pub fn calculate_summary_pay(
    summary: &SickLeavePayrollSummary,
    hourly_rate: Decimal,
    hours_per_day: Decimal,
) -> EngineResult<SickLeavePay> {
    calculate_sick_leave_pay(
        summary.employer_period_days,
        summary.weighted_percentage,
        hourly_rate,
        hours_per_day,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_full_sick_leave_pay() {
        let pay = calculate_sick_leave_pay(9, dec("100"), dec("250"), DEFAULT_HOURS_PER_DAY).unwrap();
        assert_eq!(pay.payable_hours, dec("67.5"));
        assert_eq!(pay.amount, dec("16875"));
    }

    #[test]
    fn test_partial_sick_leave_pay() {
        let pay = calculate_sick_leave_pay(4, dec("50"), dec("200"), DEFAULT_HOURS_PER_DAY).unwrap();
        assert_eq!(pay.payable_hours, dec("15"));
        assert_eq!(pay.amount, dec("3000"));
    }

    #[test]
    fn test_zero_employer_days_pay_nothing() {
        let pay = calculate_sick_leave_pay(0, dec("100"), dec("200"), DEFAULT_HOURS_PER_DAY).unwrap();
        assert_eq!(pay.payable_hours, Decimal::ZERO);
        assert_eq!(pay.amount, Decimal::ZERO);
    }

    #[test]
    fn test_custom_hours_per_day() {
        let pay = calculate_sick_leave_pay(2, dec("100"), dec("100"), dec("8")).unwrap();
        assert_eq!(pay.payable_hours, dec("16"));
    }

    #[test]
    fn test_summary_pay_ignores_nav_days() {
        let summary = SickLeavePayrollSummary {
            employee_id: "emp".to_string(),
            employee_name: None,
            total_sick_days: 20,
            employer_period_days: 9,
            nav_period_days: 11,
            weighted_percentage: dec("80"),
            fragments: vec![],
        };
        let pay = calculate_summary_pay(&summary, dec("200"), DEFAULT_HOURS_PER_DAY).unwrap();
        assert_eq!(pay.payable_hours, dec("54"));
        assert_eq!(pay.amount, dec("10800"));
    }

    #[test]
    fn test_overflowing_rate_is_a_calculation_error() {
        let result = calculate_sick_leave_pay(9, dec("100"), Decimal::MAX, DEFAULT_HOURS_PER_DAY);
        match result {
            Err(EngineError::CalculationError { message }) => {
                assert_eq!(message, "sick-leave pay overflows");
            }
            other => panic!("expected CalculationError, got {other:?}"),
        }
    }

    #[test]
    fn test_overflowing_hours_per_day_is_a_calculation_error() {
        let result = calculate_sick_leave_pay(16, dec("100"), dec("200"), Decimal::MAX);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
