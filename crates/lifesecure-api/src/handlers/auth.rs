//! Admin authentication handlers (login, logout)

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use crate::dto::{LoginRequest, LoginResponse};
use crate::response::{error_response, ApiResponse, ErrorResponse};
use crate::session::bearer_token;
use crate::state::AppState;

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ErrorResponse> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("VALIDATION_ERROR", "Username and password are required")),
        ));
    }

    let ok = state
        .auth
        .authenticate(&payload.username, &payload.password)
        .await
        .map_err(error_response)?;
    if !ok {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("INVALID_CREDENTIALS", "Invalid username or password")),
        ));
    }

    let session = state.sessions.create(&payload.username);
    Ok(Json(ApiResponse::success(LoginResponse {
        token: session.token,
        username: session.username,
    })))
}

/// POST /api/v1/auth/logout
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<ApiResponse<()>> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.revoke(&token);
    }
    Json(ApiResponse::success(()))
}
