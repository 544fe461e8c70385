//! Shift cost calculation.
//!
//! This module combines a shift's base pay with its resolved supplements into
//! a [`ShiftCostBreakdown`]. The breakdown's `total_cost` is exactly the sum of
//! its cost fields.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Shift, ShiftCost, ShiftCostBreakdown, SupplementRuleSet, SupplementType};

use super::supplement_resolver::resolve_supplements;

/// Minutes per hour as a Decimal.
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Returns the paid hours of a shift: its length less the unpaid break.
///
/// Fails with [`EngineError::InvalidShift`] when the shift has zero length
/// or the break is longer than the shift.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_base_hours;
/// use payroll_engine::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shift = Shift::new("s1", NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), "22:00", "06:30")
///     .unwrap()
///     .with_break(30);
/// assert_eq!(calculate_base_hours(&shift).unwrap(), Decimal::new(8, 0));
/// ```
pub fn calculate_base_hours(shift: &Shift) -> EngineResult<Decimal> {
    let duration = shift.duration_minutes();
    if duration <= 0 {
        return Err(EngineError::InvalidShift {
            shift_id: shift.id.clone(),
            message: "shift has zero duration".to_string(),
        });
    }

    let break_minutes = i64::from(shift.break_minutes);
    if break_minutes > duration {
        return Err(EngineError::InvalidShift {
            shift_id: shift.id.clone(),
            message: format!(
                "break of {} minutes exceeds shift length of {} minutes",
                break_minutes, duration
            ),
        });
    }

    Ok(Decimal::from(duration - break_minutes) / MINUTES_PER_HOUR)
}

/// Costs one shift and records which rule produced each supplement.
///
/// # Arguments
///
/// * `shift` - The shift to cost
/// * `base_rate` - The employee's base hourly rate
/// * `rules` - The active supplement rules
///
/// # Errors
///
/// Returns [`EngineError::InvalidShift`] for a zero-length shift or an
/// oversized break, and [`EngineError::CalculationError`] for a negative rate
/// or an amount that overflows.
pub fn cost_shift(
    shift: &Shift,
    base_rate: Decimal,
    rules: &SupplementRuleSet,
) -> EngineResult<ShiftCost> {
    if base_rate < Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!("negative base rate {} for shift '{}'", base_rate, shift.id),
        });
    }

    let base_hours = calculate_base_hours(shift)?;
    let base_cost = base_hours
        .checked_mul(base_rate)
        .ok_or_else(|| EngineError::overflow(format_args!("base cost for shift '{}'", shift.id)))?;
    let supplements = resolve_supplements(shift, base_hours, base_cost, rules)?;

    let hours_of = |t: SupplementType| supplements.get(&t).map_or(Decimal::ZERO, |s| s.hours);
    let cost_of = |t: SupplementType| supplements.get(&t).map_or(Decimal::ZERO, |s| s.cost);

    let mut breakdown = ShiftCostBreakdown {
        base_hours,
        base_cost,
        night_hours: hours_of(SupplementType::Night),
        night_supplement: cost_of(SupplementType::Night),
        evening_hours: hours_of(SupplementType::Evening),
        evening_supplement: cost_of(SupplementType::Evening),
        weekend_supplement: cost_of(SupplementType::Weekend),
        holiday_supplement: cost_of(SupplementType::Holiday),
        total_cost: Decimal::ZERO,
    };
    breakdown.total_cost = breakdown
        .checked_component_sum()
        .ok_or_else(|| EngineError::overflow(format_args!("total cost for shift '{}'", shift.id)))?;

    debug!(
        shift_id = %shift.id,
        base_hours = %breakdown.base_hours,
        total_cost = %breakdown.total_cost,
        supplements = supplements.len(),
        "Shift costed"
    );

    Ok(ShiftCost {
        shift_id: shift.id.clone(),
        date: shift.date,
        breakdown,
        supplements,
    })
}

/// Calculates the cost breakdown for one shift.
///
/// base hours = (length − break) / 60, base cost = base hours × rate, and
/// total cost = base cost + night + evening + weekend + holiday supplements.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_shift_cost;
/// use payroll_engine::models::{Shift, SupplementRuleSet, SupplementType, WageSupplementRule};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = SupplementRuleSet::new(vec![
///     WageSupplementRule::new("night", "Nattillegg", SupplementType::Night, Decimal::new(50, 0))
///         .with_window("23:00", "06:00")
///         .unwrap(),
/// ]);
/// let shift = Shift::new("s1", NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), "22:00", "06:00").unwrap();
///
/// let breakdown = calculate_shift_cost(&shift, Decimal::new(200, 0), &rules).unwrap();
/// assert_eq!(breakdown.base_cost, Decimal::new(1600, 0));
/// assert_eq!(breakdown.night_supplement, Decimal::new(350, 0));
/// assert_eq!(breakdown.total_cost, Decimal::new(1950, 0));
/// ```
pub fn calculate_shift_cost(
    shift: &Shift,
    base_rate: Decimal,
    rules: &SupplementRuleSet,
) -> EngineResult<ShiftCostBreakdown> {
    cost_shift(shift, base_rate, rules).map(|cost| cost.breakdown)
}
