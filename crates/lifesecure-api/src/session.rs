//! Bearer-token session guard

use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use uuid::Uuid;

use lifesecure_core::services::AdminSession;

use crate::response::{ApiResponse, ErrorResponse};
use crate::state::AppState;

fn unauthorized() -> ErrorResponse {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::error("UNAUTHORIZED", "Admin session required")),
    )
}

/// Extract and validate the `Authorization: Bearer <token>` session header.
pub fn require_session(state: &AppState, headers: &HeaderMap) -> Result<AdminSession, ErrorResponse> {
    let token = bearer_token(headers).ok_or_else(unauthorized)?;
    state.sessions.validate(&token).ok_or_else(unauthorized)
}

pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}
