//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_summary_pay, cost_shift, summarize_costs, summarize_sick_leave,
};
use crate::error::{EngineError, EngineResult};
use crate::models::Shift;

use super::request::{ShiftCostRequest, SickLeaveSummaryRequest};
use super::response::{
    ApiError, ApiErrorResponse, EmployeeSickLeave, ShiftCostResponse, SickLeaveSummaryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shift-costs", post(shift_costs_handler))
        .route("/sick-leave/summary", post(sick_leave_summary_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Turns an engine error into its mapped status and body.
fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for POST /shift-costs.
///
/// Costs every shift against the configured supplement rules and returns the
/// per-shift breakdowns with per-day and period totals.
async fn shift_costs_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftCostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift cost request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match perform_shift_costing(request, &state) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                shifts_count = result.shifts.len(),
                total_cost = %result.totals.total_cost,
                duration_us = start_time.elapsed().as_micros(),
                "Shift costing completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => error_response(err, correlation_id),
    }
}

fn perform_shift_costing(
    request: ShiftCostRequest,
    state: &AppState,
) -> EngineResult<ShiftCostResponse> {
    let rules = state.rules();
    let shifts = request
        .shifts
        .into_iter()
        .map(Shift::try_from)
        .collect::<EngineResult<Vec<_>>>()?;

    let costs = shifts
        .iter()
        .map(|shift| cost_shift(shift, request.base_hourly_rate, rules))
        .collect::<EngineResult<Vec<_>>>()?;
    let summary = summarize_costs(&costs)?;

    Ok(ShiftCostResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        shifts: costs,
        per_day: summary.per_day,
        totals: summary.totals,
    })
}

/// Handler for POST /sick-leave/summary.
///
/// Summarizes every employee's sick leave in the period, adding pay for
/// employees whose hourly rate is supplied.
async fn sick_leave_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SickLeaveSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing sick leave summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match perform_sick_leave_summary(&request, &state) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                spans_count = request.spans.len(),
                employees_count = result.employees.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Sick leave summary completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => error_response(err, correlation_id),
    }
}

fn perform_sick_leave_summary(
    request: &SickLeaveSummaryRequest,
    state: &AppState,
) -> EngineResult<SickLeaveSummaryResponse> {
    let settings = state.sick_leave();
    let averaging = request
        .percentage_averaging
        .unwrap_or(settings.percentage_averaging);

    let summaries = summarize_sick_leave(
        &request.spans,
        &request.period,
        averaging,
        &request.employee_names,
    )?;

    let employees = summaries
        .into_iter()
        .map(|summary| {
            let pay = request
                .hourly_rates
                .get(&summary.employee_id)
                .map(|rate| calculate_summary_pay(&summary, *rate, settings.hours_per_day))
                .transpose()?;
            Ok(EmployeeSickLeave { summary, pay })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(SickLeaveSummaryResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period: request.period,
        employees,
    })
}
