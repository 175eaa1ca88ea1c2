use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, FieldErrorsDto},
    server::error::validation::FieldErrors,
};

/// `WWW-Authenticate` challenge sent for basic authentication failures.
pub static BASIC_CHALLENGE: &str = "Basic realm=\"api\"";
/// `WWW-Authenticate` challenge sent for token authentication failures.
pub static TOKEN_CHALLENGE: &str = "Token";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No credentials and the view requires them; `challenge` comes from the view's first scheme.
    #[error("Authentication credentials were not provided.")]
    NotAuthenticated { challenge: Option<&'static str> },
    #[error("Invalid token.")]
    InvalidToken,
    #[error("Invalid token header. {0}")]
    InvalidTokenHeader(&'static str),
    #[error("Invalid basic header. {0}")]
    InvalidBasicHeader(&'static str),
    #[error("Invalid username/password.")]
    InvalidCredentials,
    #[error("You do not have permission to perform this action.")]
    PermissionDenied,
    /// Credentials submitted to a login or token endpoint did not match a user.
    #[error("Unable to log in with provided credentials.")]
    LoginFailed,
}

impl AuthError {
    fn detail(status: StatusCode, detail: String, challenge: Option<&'static str>) -> Response {
        let mut response = (status, Json(ErrorDto { detail })).into_response();

        if let Some(challenge) = challenge {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static(challenge));
        }

        response
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication error: {}", self);

        match self {
            Self::NotAuthenticated { challenge } => {
                // 401 must carry a challenge header
                let status = match challenge {
                    Some(_) => StatusCode::UNAUTHORIZED,
                    None => StatusCode::FORBIDDEN,
                };

                Self::detail(status, self.to_string(), challenge)
            }
            Self::InvalidToken | Self::InvalidTokenHeader(_) => {
                Self::detail(StatusCode::UNAUTHORIZED, self.to_string(), Some(TOKEN_CHALLENGE))
            }
            Self::InvalidBasicHeader(_) | Self::InvalidCredentials => {
                Self::detail(StatusCode::UNAUTHORIZED, self.to_string(), Some(BASIC_CHALLENGE))
            }
            Self::PermissionDenied => Self::detail(StatusCode::FORBIDDEN, self.to_string(), None),
            Self::LoginFailed => {
                let mut errors = FieldErrors::new();
                errors.add_non_field(self.to_string());

                (StatusCode::BAD_REQUEST, Json(FieldErrorsDto::from(errors))).into_response()
            }
        }
    }
}
