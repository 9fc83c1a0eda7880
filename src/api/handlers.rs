//! HTTP request handlers for the Punch Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{EmployeePayroll, calculate_payroll_breakdown};
use crate::config::PayrollInput;
use crate::models::PayrollReport;

use super::response::{ApiError, ApiErrorResponse, BreakdownResponse, EmployeeBreakdown};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/payroll/breakdown", post(breakdown_handler))
}

/// Handler for POST /payroll.
///
/// Returns the payroll report keyed by employee name.
async fn payroll_handler(payload: Result<Json<PayrollInput>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match run_calculation(&input, correlation_id) {
        Ok(payrolls) => {
            let report: PayrollReport = payrolls.iter().map(EmployeePayroll::to_result).collect();
            json_response(StatusCode::OK, &report)
        }
        Err(response) => response,
    }
}

/// Handler for POST /payroll/breakdown.
///
/// Returns each employee's totals along with the per-punch tier allocations.
async fn breakdown_handler(payload: Result<Json<PayrollInput>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll breakdown request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match run_calculation(&input, correlation_id) {
        Ok(payrolls) => {
            let body = BreakdownResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employees: payrolls.into_iter().map(EmployeeBreakdown::from).collect(),
            };
            json_response(StatusCode::OK, &body)
        }
        Err(response) => response,
    }
}

/// Runs the calculation, turning engine errors into ready-made error responses.
fn run_calculation(
    input: &PayrollInput,
    correlation_id: Uuid,
) -> Result<Vec<EmployeePayroll>, Response> {
    match calculate_payroll_breakdown(input) {
        Ok(payrolls) => {
            info!(
                correlation_id = %correlation_id,
                employees = payrolls.len(),
                punches = input.punch_count(),
                "Payroll calculation completed successfully"
            );
            Ok(payrolls)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll calculation failed"
            );
            Err(ApiErrorResponse::from(err).into_response())
        }
    }
}

/// Maps a JSON extraction failure to a 400 response.
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

    json_response(StatusCode::BAD_REQUEST, &error)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
