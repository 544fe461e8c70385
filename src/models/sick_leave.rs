//! Sick-leave models.
//!
//! This module contains the [`SickLeaveSpan`] record supplied by the absence
//! store, and the computed [`SickLeaveApportionment`],
//! [`SickLeavePayrollSummary`] and [`SickLeavePay`] values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Lifecycle state of a sick-leave record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SickLeaveStatus {
    /// The employee is still away.
    #[default]
    Active,
    /// The employee has returned.
    Completed,
    /// The record was withdrawn and carries no leave.
    Cancelled,
}

/// A sick-leave record for one employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SickLeaveSpan;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let span = SickLeaveSpan::new("emp_001", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .ending(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap())
///     .with_percentage(Decimal::new(50, 0));
/// assert!(span.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SickLeaveSpan {
    /// Identifier of the record in the absence store, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The employee on leave.
    pub employee_id: String,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Declared last day of leave.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Expected return date.
    #[serde(default)]
    pub expected_return_date: Option<NaiveDate>,
    /// Actual return date.
    #[serde(default)]
    pub actual_return_date: Option<NaiveDate>,
    /// Degree of sick leave, 0 to 100.
    pub percentage: Decimal,
    /// Whether the employer period was already used up.
    #[serde(default)]
    pub employer_period_completed: bool,
    /// Date NAV takes over compensation.
    #[serde(default)]
    pub nav_takeover_date: Option<NaiveDate>,
    /// Record status.
    #[serde(default)]
    pub status: SickLeaveStatus,
}

impl SickLeaveSpan {
    /// Creates an open, active, 100 % span starting on `start_date`.
    pub fn new(employee_id: &str, start_date: NaiveDate) -> Self {
        Self {
            id: None,
            employee_id: employee_id.to_string(),
            start_date,
            end_date: None,
            expected_return_date: None,
            actual_return_date: None,
            percentage: Decimal::ONE_HUNDRED,
            employer_period_completed: false,
            nav_takeover_date: None,
            status: SickLeaveStatus::Active,
        }
    }

    /// Sets the declared end date.
    pub fn ending(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Sets the expected return date.
    pub fn expected_back(mut self, date: NaiveDate) -> Self {
        self.expected_return_date = Some(date);
        self
    }

    /// Sets the actual return date.
    pub fn returned(mut self, date: NaiveDate) -> Self {
        self.actual_return_date = Some(date);
        self
    }

    /// Sets the sick-leave percentage.
    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = percentage;
        self
    }

    /// Sets the NAV takeover date.
    pub fn nav_from(mut self, date: NaiveDate) -> Self {
        self.nav_takeover_date = Some(date);
        self
    }

    /// Marks the employer period as already completed.
    pub fn employer_period_done(mut self) -> Self {
        self.employer_period_completed = true;
        self
    }

    /// Sets the record status.
    pub fn with_status(mut self, status: SickLeaveStatus) -> Self {
        self.status = status;
        self
    }

    /// Checks that the percentage lies in `0..=100`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.percentage < Decimal::ZERO || self.percentage > Decimal::ONE_HUNDRED {
            return Err(EngineError::InvalidSickLeave {
                employee_id: self.employee_id.clone(),
                message: format!("percentage {} is outside 0..=100", self.percentage),
            });
        }
        Ok(())
    }
}

/// How one span falls inside a payroll period.
///
/// `employer_days + nav_days == total_days` always holds. A span that does not
/// reach into the period has all counts zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SickLeaveApportionment {
    /// Days of the span inside the period, inclusive.
    pub total_days: i64,
    /// Days paid by the employer.
    pub employer_days: i64,
    /// Days paid by NAV.
    pub nav_days: i64,
    /// First day of the span inside the period.
    pub effective_start: NaiveDate,
    /// Last day of the span inside the period.
    pub effective_end: NaiveDate,
}

impl SickLeaveApportionment {
    /// Returns true when the span has at least one day inside the period.
    pub fn contributes(&self) -> bool {
        self.total_days > 0
    }
}

/// One span's contribution to an employee summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SickLeaveFragment {
    /// The source record, if it carried an id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_id: Option<String>,
    /// First day inside the period.
    pub effective_start: NaiveDate,
    /// Last day inside the period.
    pub effective_end: NaiveDate,
    /// Days inside the period.
    pub total_days: i64,
    /// Employer-paid days.
    pub employer_days: i64,
    /// NAV-paid days.
    pub nav_days: i64,
    /// The span's sick-leave percentage.
    pub percentage: Decimal,
}

/// Sick leave for one employee inside one payroll period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SickLeavePayrollSummary {
    /// The employee.
    pub employee_id: String,
    /// Display name from the employee directory, if found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// Sum of fragment days.
    pub total_sick_days: i64,
    /// Sum of employer-paid days.
    pub employer_period_days: i64,
    /// Sum of NAV-paid days.
    pub nav_period_days: i64,
    /// Averaged sick-leave percentage across fragments; zero without fragments.
    pub weighted_percentage: Decimal,
    /// Contributing fragments in input order.
    pub fragments: Vec<SickLeaveFragment>,
}

/// Employer-paid sick leave converted to hours and money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SickLeavePay {
    /// Employer days × hours per day × percentage / 100.
    pub payable_hours: Decimal,
    /// `payable_hours` × hourly rate.
    pub amount: Decimal,
}
