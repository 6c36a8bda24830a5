use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorFormat {
    Text,
    Json,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    format: ErrorFormat,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let (status, message) = match err {
            ApplicationError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Infrastructure(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
                DomainError::Persistence(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            },
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        }
        Self::new(status, message)
    }

    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            format: ErrorFormat::Text,
        }
    }

    /// Render as `{"error": "<message>"}` instead of plain text.
    #[must_use]
    pub const fn json(mut self) -> Self {
        self.format = ErrorFormat::Json;
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self.format {
            ErrorFormat::Text => (
                self.status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.message,
            )
                .into_response(),
            ErrorFormat::Json => (
                self.status,
                Json(ErrorBody {
                    error: self.message,
                }),
            )
                .into_response(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
