//! HTTP error type and the mapping from domain failures to status codes.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::errors::ShortifyError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    InvalidUrl { message: String, details: Value },
    NotFound { message: String, details: Value },
    CodeGeneration { message: String, details: Value },
    StoreUnavailable { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// Status code and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::InvalidUrl { .. } => (StatusCode::BAD_REQUEST, "invalid_url"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::CodeGeneration { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "code_generation_failed")
            }
            AppError::StoreUnavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable")
            }
        }
    }

    pub fn to_error_info(self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::InvalidUrl { message, details }
            | AppError::NotFound { message, details }
            | AppError::CodeGeneration { message, details }
            | AppError::StoreUnavailable { message, details } => (message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl From<ShortifyError> for AppError {
    fn from(err: ShortifyError) -> Self {
        match err {
            ShortifyError::InvalidUrl(rejection) => AppError::InvalidUrl {
                message: rejection.to_string(),
                details: json!({}),
            },
            ShortifyError::NotFound { short_code } => AppError::NotFound {
                message: "Short URL not found".to_string(),
                details: json!({ "short_code": short_code }),
            },
            ShortifyError::CodeGenerationFailed { attempts } => AppError::CodeGeneration {
                message: "Failed to generate a unique short code".to_string(),
                details: json!({ "attempts": attempts }),
            },
            // The underlying store message may carry connection details; keep it in logs.
            ShortifyError::StoreUnavailable(reason) => {
                tracing::error!("Store unavailable: {}", reason);
                AppError::StoreUnavailable {
                    message: "Storage is temporarily unavailable".to_string(),
                    details: json!({}),
                }
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(errors.field_errors()).unwrap_or(Value::Null);
        AppError::bad_request("Request validation failed", details)
    }
}

/// Malformed, mistyped or non-JSON bodies share the validation error shape.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            rejection.body_text(),
            json!({ "rejected_status": rejection.status().as_u16() }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
