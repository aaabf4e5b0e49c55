//! Lead intake handler

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use lifesecure_core::services::LeadSubmission;

use crate::dto::CustomerDto;
use crate::response::{error_response, ApiResponse, ErrorResponse};
use crate::state::AppState;

/// POST /api/v1/leads
pub async fn submit_lead(
    State(state): State<AppState>,
    Json(payload): Json<LeadSubmission>,
) -> Result<(StatusCode, Json<ApiResponse<CustomerDto>>), ErrorResponse> {
    let customer = state.intake.submit(payload).await.map_err(error_response)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(customer.into())),
    ))
}
