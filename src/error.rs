// src/error.rs

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const NOT_FOUND_MESSAGE: &str = "The requested URL was not found on the server.";

/// Global Application Error Enum.
/// Every variant renders as `{success: false, error: <code>, message: <text>}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // 400 Bad Request
    #[error("{0}")]
    BadRequest(String),

    // 404 Not Found
    #[error("{0}")]
    NotFound(String),

    // 405 Method Not Allowed
    #[error("The method is not allowed for the requested URL.")]
    MethodNotAllowed,

    // 500 Internal Server Error
    #[error("Something went wrong: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// 404 for a path that no route accepts.
    pub fn route_not_found() -> Self {
        AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts the error into a JSON response with the matching HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let AppError::InternalServerError(msg) = &self {
            tracing::error!("Internal Server Error: {}", msg);
        }

        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Allows using `?` operator on store calls.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// A path segment that does not parse (e.g. `/questions/abc`) means the route does not exist.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Path rejected: {}", rejection.body_text());
        AppError::route_not_found()
    }
}
