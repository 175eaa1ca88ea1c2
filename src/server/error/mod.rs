//! Error types for the server application.
//!
//! Domain errors (authentication, configuration, validation) and library errors are
//! aggregated into [`Error`], which maps itself onto HTTP responses. Client mistakes
//! become 4xx responses with a `detail` message or a field error map; everything
//! else is logged and reported as a generic 500.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::FieldErrors},
};

/// Main error type for the server application.
///
/// `thiserror`'s `#[from]` conversions let services and controllers use `?` on repository,
/// session and validation results directly.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or permission failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request payload or query parameters failed validation.
    #[error(transparent)]
    Validation(#[from] FieldErrors),
    /// No record with the requested primary key, or the path did not parse.
    #[error("Not found.")]
    NotFound,
    /// Request body could not be parsed as JSON of the expected shape.
    #[error("JSON parse error - {0}")]
    ParseError(String),
    /// Internal error indicating a bug or a broken invariant.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::ParseError(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(_: PathRejection) -> Self {
        Error::NotFound
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and malformed JSON bodies
/// - 401 Unauthorized / 403 Forbidden - See [`AuthError`]
/// - 404 Not Found - Unknown primary keys
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::Validation(err) => err.into_response(),
            Self::NotFound => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        detail: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::ParseError(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        detail: self.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full message is logged; the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                detail: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
