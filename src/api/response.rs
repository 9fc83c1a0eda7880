//! Response types for the Punch Payroll Engine API.
//!
//! This module defines the breakdown response body, the error response
//! structures, and the mapping from [`EngineError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{EmployeePayroll, PunchAllocation};
use crate::error::EngineError;
use crate::models::PayrollResult;

/// One employee's rounded totals together with how each punch was apportioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeBreakdown {
    /// Rounded totals, flattened into the object.
    #[serde(flatten)]
    pub summary: PayrollResult,
    /// Per-punch allocations in chronological order.
    pub punches: Vec<PunchAllocation>,
}

impl From<EmployeePayroll> for EmployeeBreakdown {
    fn from(payroll: EmployeePayroll) -> Self {
        Self {
            summary: payroll.to_result(),
            punches: payroll.allocations,
        }
    }
}

/// Response body for `POST /payroll/breakdown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Per-employee breakdowns in input order.
    pub employees: Vec<EmployeeBreakdown>,
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

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
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
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        message,
                    ),
                }
            }
            EngineError::InvalidTimestamp { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_TIMESTAMP",
                    message,
                    "Timestamps must look like 2022-02-18 09:00:00 or 2022-02-18T09:00:00",
                ),
            ),
            EngineError::JobNotFound { job, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "JOB_NOT_FOUND",
                    message,
                    format!("The job '{}' is not listed in jobMeta", job),
                ),
            ),
            EngineError::InvalidPunch { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_PUNCH",
                    message,
                    "Every punch must end after it starts",
                ),
            ),
            EngineError::AmountOverflow { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "AMOUNT_OVERFLOW",
                    message,
                    "A rate or benefits rate is too large for the hours worked",
                ),
            ),
            EngineError::DuplicateJob { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("DUPLICATE_JOB", message))
            }
            EngineError::DuplicateEmployee { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("DUPLICATE_EMPLOYEE", message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_job_not_found_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::JobNotFound {
            job: "Shop - Welder".to_string(),
            employee: "Mike".to_string(),
            punch_index: 2,
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "JOB_NOT_FOUND");
        assert!(api_error.error.message.contains("Shop - Welder"));
        assert!(api_error.error.message.contains("punch #2"));
    }

    #[test]
    fn test_invalid_punch_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidPunch {
            employee: "Mike".to_string(),
            punch_index: 0,
            message: "end must be after start".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_PUNCH");
    }

    #[test]
    fn test_invalid_timestamp_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidTimestamp {
            value: "noon".to_string(),
            message: "bad".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_TIMESTAMP");
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("Configuration file not found: /missing")
        );
    }

    #[test]
    fn test_amount_overflow_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::AmountOverflow {
            employee: "Mike".to_string(),
            punch_index: 0,
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "AMOUNT_OVERFLOW");
    }

    #[tokio::test]
    async fn test_error_response_carries_status_and_body() {
        let response = ApiErrorResponse::from(EngineError::DuplicateEmployee {
            employee: "Alex".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "DUPLICATE_EMPLOYEE");
        assert_eq!(body["message"], "Duplicate employee: Alex");
    }

    #[test]
    fn test_duplicates_map_to_distinct_codes() {
        let job: ApiErrorResponse = EngineError::DuplicateJob {
            job: "Crew".to_string(),
        }
        .into();
        let employee: ApiErrorResponse = EngineError::DuplicateEmployee {
            employee: "Alex".to_string(),
        }
        .into();

        assert_eq!(job.error.code, "DUPLICATE_JOB");
        assert_eq!(employee.error.code, "DUPLICATE_EMPLOYEE");
    }
}
