//! HTTP request handlers for the forecast API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    ProjectionInput, calculate_net_income, calculate_salary_cost, run_projection,
};
use crate::error::ForecastResult;
use crate::models::{ProjectionResult, TaxYearSettings};

use super::request::{ProjectionRequest, SalaryBreakdownRequest};
use super::response::{ApiError, ApiErrorResponse, SalaryBreakdownResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/projection", post(projection_handler))
        .route("/salary/breakdown", post(salary_breakdown_handler))
        .route("/tax-settings/:year", get(tax_settings_handler))
        .with_state(state)
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON body rejection onto an API error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
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

    ApiErrorResponse::bad_request(error)
}

/// Uses the supplied settings, falling back to configuration for `year`.
fn resolve_tax_settings(
    state: &AppState,
    year: i32,
    supplied: Option<TaxYearSettings>,
) -> ForecastResult<TaxYearSettings> {
    match supplied {
        Some(settings) => Ok(settings),
        None => state.config().tax_settings(year).cloned(),
    }
}

/// Handler for POST /projection.
///
/// Projects a full year from the supplied records and returns the
/// projection result with its audit trace.
async fn projection_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing projection request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_error(correlation_id, rejection).into_response(),
    };

    let year = request.year;
    let start_time = Instant::now();
    match perform_projection(&state, request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                year,
                calculation_id = %result.calculation_id,
                profit = %result.totals.profit,
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Projection request completed"
            );
            json_ok(result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year,
                error = %err,
                "Projection failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn perform_projection(
    state: &AppState,
    request: ProjectionRequest,
) -> ForecastResult<ProjectionResult> {
    let settings = resolve_tax_settings(state, request.year, request.tax_settings.clone())?;
    let input = ProjectionInput::try_from(request)?;
    run_projection(&input, &settings)
}

/// Handler for POST /salary/breakdown.
///
/// Returns the employer cost and employee net income for one gross salary.
async fn salary_breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryBreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary breakdown request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_error(correlation_id, rejection).into_response(),
    };

    let settings = match resolve_tax_settings(&state, request.year, request.tax_settings) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year = request.year,
                error = %err,
                "Tax settings unavailable"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let breakdown = calculate_salary_cost(request.gross_salary, &settings).and_then(|cost| {
        Ok(SalaryBreakdownResponse {
            year: request.year,
            cost,
            net: calculate_net_income(request.gross_salary, &settings)?,
        })
    });
    let response = match breakdown {
        Ok(response) => response,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year = request.year,
                error = %err,
                "Salary breakdown failed"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        gross_salary = %request.gross_salary,
        total_cost = %response.cost.total_cost,
        net_salary = %response.net.net_salary,
        "Salary breakdown completed"
    );

    json_ok(response)
}

/// Handler for GET /tax-settings/:year.
async fn tax_settings_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let year = match year {
        Ok(Path(year)) => year,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid year in path"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_error(format!(
                "Invalid year: {}",
                rejection.body_text()
            )))
            .into_response();
        }
    };

    match state.config().tax_settings(year) {
        Ok(settings) => {
            info!(correlation_id = %correlation_id, year, "Served tax settings");
            json_ok(settings)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, year, "Tax settings not found");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
