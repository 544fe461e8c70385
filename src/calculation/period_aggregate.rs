//! Day and period aggregation of shift costs.
//!
//! Folds per-shift breakdowns into period totals and per-day totals. The fold
//! is purely additive, so the empty sequence yields the all-zero breakdown.
//! Totals that no longer fit in a `Decimal` are reported as errors.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{PeriodCostSummary, Shift, ShiftCost, SupplementRuleSet};

use super::shift_cost::cost_shift;

/// Folds already costed shifts into a [`PeriodCostSummary`].
///
/// Shifts are grouped per day by the date they start on.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when a total overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize_costs;
/// use payroll_engine::models::{ShiftCost, ShiftCostBreakdown};
///
/// let summary = summarize_costs(&Vec::<ShiftCost>::new()).unwrap();
/// assert_eq!(summary.shift_count, 0);
/// assert_eq!(summary.totals, ShiftCostBreakdown::zero());
/// assert!(summary.per_day.is_empty());
/// ```
pub fn summarize_costs<'a>(
    costs: impl IntoIterator<Item = &'a ShiftCost>,
) -> EngineResult<PeriodCostSummary> {
    costs
        .into_iter()
        .try_fold(PeriodCostSummary::default(), |mut summary, cost| {
            summary.shift_count += 1;
            summary.totals = summary
                .totals
                .checked_add(cost.breakdown)
                .ok_or_else(|| EngineError::overflow("period total"))?;
            let day = summary.per_day.entry(cost.date).or_default();
            *day = day
                .checked_add(cost.breakdown)
                .ok_or_else(|| EngineError::overflow(format_args!("total for {}", cost.date)))?;
            Ok(summary)
        })
}

/// Costs every shift in order and folds the results into period totals.
///
/// # Arguments
///
/// * `shifts` - The shifts to cost, in the order they should be folded
/// * `base_rate` - The employee's base hourly rate
/// * `rules` - The active supplement rules
///
/// # Errors
///
/// Returns the first error produced while costing a shift.
pub fn aggregate_shift_costs(
    shifts: &[Shift],
    base_rate: Decimal,
    rules: &SupplementRuleSet,
) -> EngineResult<PeriodCostSummary> {
    let costs = shifts
        .iter()
        .map(|shift| cost_shift(shift, base_rate, rules))
        .collect::<EngineResult<Vec<_>>>()?;
    summarize_costs(&costs)
}
