//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/shift-costs`
//! and `/sick-leave/summary` endpoints.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PercentageAveraging;
use crate::error::EngineError;
use crate::models::{PayrollPeriod, Shift, SickLeaveSpan};

/// Request body for the `/shift-costs` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCostRequest {
    /// The employee's base hourly rate.
    pub base_hourly_rate: Decimal,
    /// The shifts to cost, in order.
    pub shifts: Vec<ShiftRequest>,
}

/// Shift information in a shift cost request.
///
/// Times are kept as text here so a malformed value is reported as an
/// invalid time rather than a JSON error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The date the shift starts on.
    pub date: NaiveDate,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`; earlier than the start for overnight shifts.
    pub end_time: String,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Whether the roster marks the shift as a weekend shift.
    #[serde(default)]
    pub is_weekend: bool,
    /// Whether the roster marks the shift as a public holiday shift.
    #[serde(default)]
    pub is_holiday: bool,
}

impl TryFrom<ShiftRequest> for Shift {
    type Error = EngineError;

    fn try_from(req: ShiftRequest) -> Result<Self, Self::Error> {
        let mut shift = Shift::new(&req.id, req.date, &req.start_time, &req.end_time)?
            .with_break(req.break_minutes);
        shift.is_weekend = req.is_weekend;
        shift.is_holiday = req.is_holiday;
        Ok(shift)
    }
}

/// Request body for the `/sick-leave/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SickLeaveSummaryRequest {
    /// The payroll period to apportion against.
    pub period: PayrollPeriod,
    /// Sick-leave records for any number of employees.
    pub spans: Vec<SickLeaveSpan>,
    /// Hourly rates by employee id; employees with a rate get a pay figure.
    #[serde(default)]
    pub hourly_rates: HashMap<String, Decimal>,
    /// Display names by employee id.
    #[serde(default)]
    pub employee_names: HashMap<String, String>,
    /// Overrides the configured averaging for this request.
    #[serde(default)]
    pub percentage_averaging: Option<PercentageAveraging>,
}
