//! Response types for the duty roster API.
//!
//! This module defines the roster response body, the error response
//! structures and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{DailyStrength, PayrollPeriod, RosterOverride, StaffRoster, StaffingShortfall};

/// Response body for a successful `/roster` request.
#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    /// The payroll period rostered.
    pub period: PayrollPeriod,
    /// One roster per staff member, in staff-list order.
    pub rosters: Vec<StaffRoster>,
    /// Cross-staff tally per date.
    pub daily_strength: Vec<DailyStrength>,
    /// Days that miss the unit's minimum staffing.
    pub shortfalls: Vec<StaffingShortfall>,
    /// Overrides that were ignored.
    pub warnings: Vec<RosterWarning>,
}

/// An override the engine ignored because it matched no roster slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterWarning {
    /// The override's staff id.
    pub staff_id: String,
    /// The override's date.
    pub date: NaiveDate,
    /// Human-readable reason.
    pub message: String,
}

impl RosterWarning {
    /// Describes why `o` matched nothing.
    pub fn unmatched(o: &RosterOverride, period: &PayrollPeriod) -> Self {
        let message = if period.contains_date(o.date) {
            format!("Unknown staff id '{}'; override ignored", o.staff_id)
        } else {
            format!(
                "Date {} is outside the period {} to {}; override ignored",
                o.date,
                period.start_date(),
                period.end_date()
            )
        };
        Self {
            staff_id: o.staff_id.clone(),
            date: o.date,
            message,
        }
    }
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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPeriod {
                year,
                month,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    format!("Invalid payroll period {}-{}", year, month),
                    message,
                ),
            },
            EngineError::InvalidOverride {
                staff_id,
                date,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_OVERRIDE",
                    format!("Invalid override for staff '{}' on {}", staff_id, date),
                    message,
                ),
            },
            EngineError::DuplicateStaff { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DUPLICATE_STAFF",
                    format!("Duplicate staff id: {}", id),
                    "Every staff member in the request must have a unique id",
                ),
            },
        }
    }
}
