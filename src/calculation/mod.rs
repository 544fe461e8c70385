//! Calculation logic for the payroll engine.
//!
//! This module contains the pure functions behind shift costing (time
//! overlap, supplement resolution, base cost, period aggregation) and sick
//! leave (apportionment against a payroll period, per-employee summaries and
//! pay conversion).

mod period_aggregate;
mod shift_cost;
mod sick_leave_apportion;
mod sick_leave_pay;
mod sick_leave_summary;
mod supplement_resolver;
mod time_overlap;

pub use period_aggregate::{aggregate_shift_costs, summarize_costs};
pub use shift_cost::{calculate_base_hours, calculate_shift_cost, cost_shift};
pub use sick_leave_apportion::{apportion_sick_leave, resolve_span_end};
pub use sick_leave_pay::{DEFAULT_HOURS_PER_DAY, calculate_sick_leave_pay, calculate_summary_pay};
pub use sick_leave_summary::{
    EmployeeDirectory, PercentageAveraging, average_percentage, summarize_employee_sick_leave,
    summarize_sick_leave,
};
pub use supplement_resolver::{ResolvedSupplements, resolve_supplements, select_weekend_rule};
pub use time_overlap::{calculate_overlap_hours, overlap_minutes};
