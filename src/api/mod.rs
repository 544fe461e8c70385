//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for costing shifts and
//! summarizing sick leave over a payroll period.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ShiftCostRequest, ShiftRequest, SickLeaveSummaryRequest};
pub use response::{
    ApiError, EmployeeSickLeave, ShiftCostResponse, SickLeaveSummaryResponse,
};
pub use state::AppState;
