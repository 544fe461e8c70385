//! Response types for the payroll engine API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from engine errors to HTTP status codes.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    PayrollPeriod, ShiftCost, ShiftCostBreakdown, SickLeavePay, SickLeavePayrollSummary,
};

/// Response body for the `/shift-costs` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCostResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// One costed entry per requested shift, in request order.
    pub shifts: Vec<ShiftCost>,
    /// Totals per shift date.
    pub per_day: BTreeMap<NaiveDate, ShiftCostBreakdown>,
    /// Totals over every shift.
    pub totals: ShiftCostBreakdown,
}

/// One employee's sick-leave summary with optional pay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSickLeave {
    /// Day counts and averaged percentage.
    pub summary: SickLeavePayrollSummary,
    /// Employer-paid amount, present when an hourly rate was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay: Option<SickLeavePay>,
}

/// Response body for the `/sick-leave/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SickLeaveSummaryResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The period the spans were apportioned against.
    pub period: PayrollPeriod,
    /// Employees with sick days in the period, in order of first appearance.
    pub employees: Vec<EmployeeSickLeave>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidTime { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME",
                    message,
                    "Times of day must be written as HH:MM",
                ),
            },
            EngineError::InvalidShift { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    message,
                    "The shift data contains invalid information",
                ),
            },
            EngineError::InvalidSickLeave { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SICK_LEAVE",
                    message,
                    "The sick-leave data contains invalid information",
                ),
            },
            EngineError::InvalidPeriod { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_PERIOD", message),
            },
            EngineError::CalculationError { message: detail } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", detail),
            },
        }
    }
}
