//! HTTP request handlers for the costing engine API.
//!
//! This module contains the handler functions for both simulation
//! endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_contract_costing, calculate_job_costing};
use crate::error::EngineError;
use crate::models::{ContractAccounts, ContractCostingResult, JobCostingResult, JobModule};

use super::request::{ContractCostingRequest, JobCostingRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/simulate/contract", post(contract_handler))
        .route("/api/simulate/job", post(job_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
///
/// Structurally malformed payloads (a non-array where a list is expected,
/// a non-object body, broken JSON) are the one case that surfaces as a
/// reported error; everything else has a serde default. Data errors go
/// through the engine's error taxonomy; pre-decode failures (broken
/// syntax, wrong content type) never reach the engine and map straight to
/// an API error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            EngineError::MalformedInput { message: body_text }.into()
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::malformed_json(format!("Invalid JSON syntax: {}", err)),
            }
        }
        JsonRejection::MissingJsonContentType(_) => ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json"),
        },
        _ => ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::malformed_json("Failed to parse request body"),
        },
    }
}

/// Handler for POST /api/simulate/contract.
///
/// Accepts itemized contract accounts and returns the cost-sheet
/// breakdown plus contract metrics.
async fn contract_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContractCostingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing contract costing request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return rejection_error(correlation_id, rejection).into_response();
        }
    };

    let accounts: ContractAccounts = request.into();

    let start_time = Instant::now();
    let costing = calculate_contract_costing(&accounts, state.policy());
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        cost_of_sales = %costing.breakdown.cost_of_sales,
        notional_profit = %costing.contract_metrics.notional_profit,
        duration_us = duration.as_micros(),
        "Contract costing completed"
    );

    let result = ContractCostingResult {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        breakdown: costing.breakdown,
        contract_metrics: costing.contract_metrics,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for POST /api/simulate/job.
///
/// Accepts a list of job modules and returns per-module breakdowns plus
/// project-level grand totals.
async fn job_handler(
    State(_state): State<AppState>,
    payload: Result<Json<JobCostingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing job costing request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return rejection_error(correlation_id, rejection).into_response();
        }
    };

    let modules: Vec<JobModule> = request.modules.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let costing = calculate_job_costing(&modules);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        modules_count = costing.breakdown.len(),
        grand_total = %costing.grand_total,
        grand_price = %costing.grand_price,
        duration_us = duration.as_micros(),
        "Job costing completed"
    );

    let result = JobCostingResult {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        breakdown: costing.breakdown,
        grand_total: costing.grand_total,
        grand_price: costing.grand_price,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}
