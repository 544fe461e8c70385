//! Shift cost breakdown models.
//!
//! [`ShiftCostBreakdown`] is the auditable result of costing one shift. Every
//! component is stored, and `total_cost` is exactly the sum of the cost fields,
//! so any figure can be checked without recomputing from the shift.

use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SupplementType;

/// Hours and cost per category for one shift or a group of shifts.
///
/// Breakdowns add component-wise; [`ShiftCostBreakdown::zero`] is the identity.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ShiftCostBreakdown;
///
/// let total: ShiftCostBreakdown = Vec::<ShiftCostBreakdown>::new().into_iter().sum();
/// assert_eq!(total, ShiftCostBreakdown::zero());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCostBreakdown {
    /// Paid hours: shift length minus unpaid break.
    pub base_hours: Decimal,
    /// `base_hours` × base hourly rate.
    pub base_cost: Decimal,
    /// Hours inside the night window.
    pub night_hours: Decimal,
    /// Night supplement amount.
    pub night_supplement: Decimal,
    /// Hours inside the evening window.
    pub evening_hours: Decimal,
    /// Evening supplement amount.
    pub evening_supplement: Decimal,
    /// Weekend supplement amount.
    pub weekend_supplement: Decimal,
    /// Holiday supplement amount.
    pub holiday_supplement: Decimal,
    /// Sum of the base cost and all supplements.
    pub total_cost: Decimal,
}

impl ShiftCostBreakdown {
    /// The all-zero breakdown.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of the base cost and every supplement field.
    pub fn component_sum(&self) -> Decimal {
        self.base_cost
            + self.night_supplement
            + self.evening_supplement
            + self.weekend_supplement
            + self.holiday_supplement
    }

    /// Like [`component_sum`](Self::component_sum), but `None` on overflow.
    pub fn checked_component_sum(&self) -> Option<Decimal> {
        [
            self.night_supplement,
            self.evening_supplement,
            self.weekend_supplement,
            self.holiday_supplement,
        ]
        .into_iter()
        .try_fold(self.base_cost, Decimal::checked_add)
    }

    /// Component-wise addition that returns `None` if any field overflows.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            base_hours: self.base_hours.checked_add(rhs.base_hours)?,
            base_cost: self.base_cost.checked_add(rhs.base_cost)?,
            night_hours: self.night_hours.checked_add(rhs.night_hours)?,
            night_supplement: self.night_supplement.checked_add(rhs.night_supplement)?,
            evening_hours: self.evening_hours.checked_add(rhs.evening_hours)?,
            evening_supplement: self.evening_supplement.checked_add(rhs.evening_supplement)?,
            weekend_supplement: self.weekend_supplement.checked_add(rhs.weekend_supplement)?,
            holiday_supplement: self.holiday_supplement.checked_add(rhs.holiday_supplement)?,
            total_cost: self.total_cost.checked_add(rhs.total_cost)?,
        })
    }

    /// Checks that `total_cost` equals the sum of its components.
    pub fn verify_total(&self) -> bool {
        self.total_cost == self.component_sum()
    }

    /// Total of all supplements, excluding base cost.
    pub fn supplements_total(&self) -> Decimal {
        self.component_sum() - self.base_cost
    }
}

impl Add for ShiftCostBreakdown {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            base_hours: self.base_hours + rhs.base_hours,
            base_cost: self.base_cost + rhs.base_cost,
            night_hours: self.night_hours + rhs.night_hours,
            night_supplement: self.night_supplement + rhs.night_supplement,
            evening_hours: self.evening_hours + rhs.evening_hours,
            evening_supplement: self.evening_supplement + rhs.evening_supplement,
            weekend_supplement: self.weekend_supplement + rhs.weekend_supplement,
            holiday_supplement: self.holiday_supplement + rhs.holiday_supplement,
            total_cost: self.total_cost + rhs.total_cost,
        }
    }
}

impl AddAssign for ShiftCostBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for ShiftCostBreakdown {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a ShiftCostBreakdown> for ShiftCostBreakdown {
    fn sum<I: Iterator<Item = &'a ShiftCostBreakdown>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// One supplement rule applied to a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedSupplement {
    /// The rule that produced this supplement.
    pub rule_id: String,
    /// The rule's display name.
    pub rule_name: String,
    /// Qualifying hours.
    pub hours: Decimal,
    /// Supplement amount.
    pub cost: Decimal,
}

/// A costed shift: its breakdown plus the rules behind each supplement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCost {
    /// The ID of the costed shift.
    pub shift_id: String,
    /// The date the shift starts on.
    pub date: NaiveDate,
    /// The cost breakdown.
    pub breakdown: ShiftCostBreakdown,
    /// Supplements that applied, keyed by type.
    pub supplements: BTreeMap<SupplementType, AppliedSupplement>,
}

/// Totals for a sequence of shifts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCostSummary {
    /// Number of shifts folded in.
    pub shift_count: usize,
    /// Totals across all shifts.
    pub totals: ShiftCostBreakdown,
    /// Totals per shift start date, in date order.
    pub per_day: BTreeMap<NaiveDate, ShiftCostBreakdown>,
}
