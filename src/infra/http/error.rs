use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::error::ErrorReport;

/// Flat error body, matching the wire contract the front end consumes:
/// `{"error": "..."}` with a static message.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Client-visible error with a static public message. Diagnostic detail
/// rides the response extensions so the logging middleware can emit it
/// without it ever reaching the caller.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
    detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: &'static str, detail: Option<String>) -> Self {
        Self {
            status,
            message,
            detail,
        }
    }

    pub fn bad_request(message: &'static str, detail: Option<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, detail)
    }

    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, None)
    }

    pub fn internal(message: &'static str, detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            Some(detail.into()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.message.to_string(),
        };
        let mut response = (self.status, Json(body)).into_response();
        ErrorReport::from_message(
            "infra::http::api",
            self.status,
            self.detail.unwrap_or_else(|| self.message.to_string()),
        )
        .attach(&mut response);
        response
    }
}
