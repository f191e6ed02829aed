//! HTTP request handlers for the duty roster API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_daily_strength, check_staffing, find_unmatched_overrides, generate_roster,
};
use crate::config::ConfigLoader;
use crate::error::EngineResult;

use super::request::RosterRequest;
use super::response::{ApiError, ApiErrorResponse, RosterResponse, RosterWarning};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/roster", post(roster_handler))
        .with_state(state)
}

/// Handler for POST /roster endpoint.
///
/// Accepts a roster request and returns the generated rosters with daily
/// strength, staffing shortfalls and any ignored overrides.
async fn roster_handler(
    State(state): State<AppState>,
    payload: Result<Json<RosterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match build_roster(&request, state.config()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                year = request.year,
                month = request.month,
                staff_count = result.rosters.len(),
                overrides_count = request.overrides.len(),
                shortfalls = result.shortfalls.len(),
                warnings = result.warnings.len(),
                duration_us = duration.as_micros(),
                "Roster generated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Roster request rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Validates a request and runs the roster pipeline against the loaded
/// configuration.
fn build_roster(request: &RosterRequest, config: &ConfigLoader) -> EngineResult<RosterResponse> {
    let period = request.period()?;
    request.validate()?;

    let staff = request.staff.as_deref().unwrap_or(config.staff());

    let rosters = generate_roster(
        &period,
        staff,
        &request.overrides,
        config.holidays(),
        config.rules(),
    );
    let daily_strength = calculate_daily_strength(&rosters);
    let shortfalls = check_staffing(&daily_strength, config.staffing());
    let warnings = find_unmatched_overrides(staff, &request.overrides, &period)
        .into_iter()
        .map(|o| RosterWarning::unmatched(o, &period))
        .collect();

    Ok(RosterResponse {
        period,
        rosters,
        daily_strength,
        shortfalls,
        warnings,
    })
}
