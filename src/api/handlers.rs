//! HTTP request handlers for the NZ pay engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::sweep;
use crate::calculation::{calculate_pay_run, compute_deductions};
use crate::error::EngineError;
use crate::models::PayRunRequest;

use super::request::{DeductionsRequest, SweepRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/deductions", post(deductions_handler))
        .route("/pay-run", post(pay_run_handler))
        .route("/sweep", post(sweep_handler))
        .route("/config", get(config_handler))
        .with_state(state)
}

/// Handler for POST /deductions.
///
/// Returns the single-week breakdown for a weekly gross.
async fn deductions_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeductionsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing deductions request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match compute_deductions(request.weekly_gross, &request.settings, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                weekly_gross = %result.gross_weekly,
                take_home = %result.take_home(),
                "Deductions calculated"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /pay-run.
///
/// Calculates every week of a pay run and returns totals with an audit trace.
async fn pay_run_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayRunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay run request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match calculate_pay_run(&request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %result.calculation_id,
                weeks = result.weeks.len(),
                take_home = %result.totals.take_home,
                duration_us = result.audit_trace.duration_us,
                "Pay run completed successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /sweep.
///
/// Evaluates the engine at every whole hour from zero to `max_hours`.
async fn sweep_handler(
    State(state): State<AppState>,
    payload: Result<Json<SweepRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing sweep request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match sweep(
        request.hourly_rate,
        &request.settings,
        request.max_hours,
        state.config(),
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                hourly_rate = %request.hourly_rate,
                points = result.points.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Sweep completed successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /config.
///
/// Returns the active jurisdiction metadata and rate tables.
async fn config_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config())
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, &api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
