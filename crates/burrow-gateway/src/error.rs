use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_core::ShortenerError;
use burrow_redirector::RedirectorError;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// No mapping exists for the requested short code.
    NotFound(String),
    Shortener(ShortenerError),
    Redirector(RedirectorError),
    /// The stored URL cannot be sent back as a `Location` header.
    InvalidRedirectTarget(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Shortener(ShortenerError::Exhausted { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Shortener(ShortenerError::Storage(_))
            | AppError::Redirector(_)
            | AppError::InvalidRedirectTarget(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::NotFound(code) => format!("short code not found: {code}"),
            AppError::Shortener(e) => e.to_string(),
            AppError::Redirector(e) => e.to_string(),
            AppError::InvalidRedirectTarget(code) => {
                format!("stored url for {code} is not a valid redirect target")
            }
        }
    }
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        AppError::Shortener(value)
    }
}

impl From<RedirectorError> for AppError {
    fn from(value: RedirectorError) -> Self {
        AppError::Redirector(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            error!(status = %status, error = %message, "request failed");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
