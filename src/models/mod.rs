//! Core data models for the payroll engine.
//!
//! This module contains the records the engine reads (shifts, supplement
//! rules, sick-leave spans, payroll periods) and the values it produces.

mod cost_breakdown;
mod payroll_period;
mod shift;
mod sick_leave;
mod time_window;
mod wage_supplement;

pub use cost_breakdown::{AppliedSupplement, PeriodCostSummary, ShiftCost, ShiftCostBreakdown};
pub use payroll_period::PayrollPeriod;
pub use shift::Shift;
pub use sick_leave::{
    SickLeaveApportionment, SickLeaveFragment, SickLeavePay, SickLeavePayrollSummary,
    SickLeaveSpan, SickLeaveStatus,
};
pub use time_window::{MINUTES_PER_DAY, TimeWindow, minutes_since_midnight, parse_clock_time};
pub use wage_supplement::{
    AmountType, SupplementRuleSet, SupplementType, WageSupplementRule, WeekendDay,
};
