//! API Response wrapper

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use lifesecure_core::error::{DomainError, FieldError};

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
                fields: None,
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn validation_error(fields: Vec<FieldError>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: "VALIDATION_ERROR".to_string(),
                message: "Please correct the highlighted fields".to_string(),
                fields: Some(fields),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

pub type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

/// Map a domain error onto an HTTP response. Backend failures surface as a
/// generic message; the cause is already logged at the adapter.
pub fn error_response(err: DomainError) -> ErrorResponse {
    match err {
        DomainError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::validation_error(errors.0)),
        ),
        DomainError::CustomerNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("NOT_FOUND", "Customer not found")),
        ),
        DomainError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("INVALID_CREDENTIALS", "Invalid username or password")),
        ),
        DomainError::BackendUnavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::error(
                "BACKEND_UNAVAILABLE",
                "The operation could not be completed. Please try again.",
            )),
        ),
        DomainError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("INTERNAL_ERROR", "Something went wrong")),
        ),
    }
}
