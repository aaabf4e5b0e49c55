//! Admin dashboard handlers: customer list, stats, status workflow.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use uuid::Uuid;

use lifesecure_core::services::dashboard::{self, StatusFilter};
use lifesecure_core::services::AppointmentRequest;
use lifesecure_core::LeadStatus;

use crate::dto::{ChangeStatusRequest, CustomerDto, CustomerListQuery, StatsResponse, StatusCount};
use crate::response::{error_response, ApiResponse, ErrorResponse};
use crate::session::require_session;
use crate::state::AppState;

/// GET /api/v1/customers?status=&q=
pub async fn list_customers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CustomerListQuery>,
) -> Result<Json<ApiResponse<Vec<CustomerDto>>>, ErrorResponse> {
    require_session(&state, &headers)?;

    let filter = match query.status.as_deref() {
        None => StatusFilter::All,
        Some(s) => StatusFilter::parse(s).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("VALIDATION_ERROR", "Unknown status filter")),
            )
        })?,
    };
    let term = query.q.unwrap_or_default();

    let all = state.customers.list_all().await.map_err(error_response)?;
    let filtered = dashboard::apply_filters(&all, filter, &term);
    Ok(Json(ApiResponse::success(
        filtered.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/v1/customers/stats
pub async fn customer_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<StatsResponse>>, ErrorResponse> {
    require_session(&state, &headers)?;

    let all = state.customers.list_all().await.map_err(error_response)?;
    let counts = dashboard::counts_by_status(&all);
    let counts = LeadStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: dashboard::count_for(&counts, status),
        })
        .collect();

    Ok(Json(ApiResponse::success(StatsResponse {
        total: all.len(),
        active: dashboard::active_count(&all),
        counts,
    })))
}

/// PATCH /api/v1/customers/{id}/status
pub async fn change_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChangeStatusRequest>,
) -> Result<Json<ApiResponse<CustomerDto>>, ErrorResponse> {
    require_session(&state, &headers)?;

    let status = LeadStatus::from_str(&payload.status).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("VALIDATION_ERROR", "Unknown status value")),
        )
    })?;

    let customer = state
        .workflow
        .change_status(id, status)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(customer.into())))
}

/// POST /api/v1/customers/{id}/appointment
pub async fn schedule_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<AppointmentRequest>,
) -> Result<Json<ApiResponse<CustomerDto>>, ErrorResponse> {
    require_session(&state, &headers)?;

    let customer = state
        .workflow
        .schedule_appointment(id, &payload)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(customer.into())))
}
