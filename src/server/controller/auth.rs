use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorsDto},
        auth::{CredentialsPayload, TokenDto},
        user::UserDto,
    },
    server::{
        controller::util::{context::RequestContext, extract::ApiJson},
        error::Error,
        model::app::AppState,
        service::auth::{login::LoginService, token::TokenService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Exchange a username and password for an API token
///
/// The token is created on the first call and the same token is returned afterwards.
/// Send it as `Authorization: Token <key>` to access the pilot endpoints.
///
/// # Responses
/// - 200 (OK): The user's token
/// - 400 (Bad Request): Missing fields or credentials that do not match a user
#[utoipa::path(
    post,
    path = "/api-token-auth/",
    tag = AUTH_TAG,
    request_body = CredentialsPayload,
    responses(
        (status = 200, description = "API token of the user", body = TokenDto),
        (status = 400, description = "Invalid credentials", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn obtain_token(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsPayload>,
) -> Result<impl IntoResponse, Error> {
    let token = TokenService::new(&state.db).obtain_token(payload).await?;

    Ok(Json(token))
}

/// Log in with a username and password to start a session
///
/// # Responses
/// - 200 (OK): The logged in user, the session cookie identifies them from now on
/// - 400 (Bad Request): Missing fields or credentials that do not match a user
#[utoipa::path(
    post,
    path = "/api-auth/login/",
    tag = AUTH_TAG,
    request_body = CredentialsPayload,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Invalid credentials", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ctx: RequestContext,
    ApiJson(payload): ApiJson<CredentialsPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = LoginService::new(&state.db, &session)
        .login(payload, &ctx.urls)
        .await?;

    Ok(Json(user))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    post,
    path = "/api-auth/logout/",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    LoginService::new(&state.db, &session).logout().await?;

    Ok(StatusCode::NO_CONTENT)
}
