//! Typed errors and HTTP mapping.

use crate::config::ALLOWED_METHODS;
use crate::rating::RatingError;
use crate::response::respond;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    /// Missing or unknown auth token. Answered without a body.
    #[error("forbidden")]
    Forbidden,
    /// Mutating request outside the movies path. Answered with the `Allow` header.
    #[error("method not allowed")]
    NotAllowed,
    /// Title already taken on create. Reported as 200 with the message, not as a failure.
    #[error("record movie={0} already exists")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("Failed to fetch movie details: {0}")]
    Rating(#[from] RatingError),
    #[error("template: {0}")]
    Template(#[from] std::io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Conflict(_) => StatusCode::OK,
            AppError::Internal(_)
            | AppError::Db(_)
            | AppError::Rating(_)
            | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Forbidden => respond(status, None),
            AppError::NotAllowed => {
                let mut resp = respond(status, None);
                resp.headers_mut()
                    .insert(header::ALLOW, header::HeaderValue::from_static(ALLOWED_METHODS));
                resp
            }
            other => {
                if status.is_server_error() {
                    tracing::error!(error = %other, "request failed");
                }
                respond(status, Some(other.to_string()))
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
