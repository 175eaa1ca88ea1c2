use std::marker::PhantomData;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Method},
};
use tower_sessions::Session;

use crate::server::{
    error::{
        auth::{AuthError, BASIC_CHALLENGE, TOKEN_CHALLENGE},
        Error,
    },
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
    service::auth::{permission::Permission, AuthService},
    util::crypto::decode_basic_credentials,
};

/// A way of identifying the caller of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Basic base64(username:password)`
    Basic,
    /// Session cookie set by logging in
    Session,
    /// `Authorization: Token <key>`
    Token,
}

impl AuthScheme {
    /// `WWW-Authenticate` challenge sent when this scheme is the first one a view accepts
    pub fn challenge(self) -> Option<&'static str> {
        match self {
            Self::Basic => Some(BASIC_CHALLENGE),
            Self::Token => Some(TOKEN_CHALLENGE),
            Self::Session => None,
        }
    }
}

/// Authentication schemes a view accepts, tried in order.
pub trait AuthPolicy: Send + Sync + 'static {
    const SCHEMES: &'static [AuthScheme];
}

/// Basic and session authentication
pub struct DefaultAuth;

impl AuthPolicy for DefaultAuth {
    const SCHEMES: &'static [AuthScheme] = &[AuthScheme::Basic, AuthScheme::Session];
}

/// Token authentication only
pub struct TokenAuth;

impl AuthPolicy for TokenAuth {
    const SCHEMES: &'static [AuthScheme] = &[AuthScheme::Token];
}

/// The authenticated user of a request, or an anonymous caller.
///
/// Extraction fails only when credentials are present but invalid; missing credentials yield
/// an anonymous caller and are turned into 401/403 by [`Caller::require`].
pub struct Caller<P: AuthPolicy = DefaultAuth> {
    user: Option<UserModel>,
    policy: PhantomData<P>,
}

impl<P: AuthPolicy> Caller<P> {
    pub fn anonymous() -> Self {
        Self {
            user: None,
            policy: PhantomData,
        }
    }

    pub fn authenticated(user: UserModel) -> Self {
        Self {
            user: Some(user),
            policy: PhantomData,
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|user| user.id)
    }

    /// Checks view-level permissions for the request method.
    pub fn require(&self, method: &Method, permissions: &[Permission]) -> Result<(), Error> {
        if permissions
            .iter()
            .all(|permission| permission.has_permission(method, self.user_id()))
        {
            Ok(())
        } else {
            Err(self.denied())
        }
    }

    /// Checks object-level permissions against the owner of the target record.
    pub fn require_object(
        &self,
        method: &Method,
        permissions: &[Permission],
        owner_id: i32,
    ) -> Result<(), Error> {
        if permissions
            .iter()
            .all(|permission| permission.has_object_permission(method, self.user_id(), owner_id))
        {
            Ok(())
        } else {
            Err(self.denied())
        }
    }

    /// The authenticated user, failing like a permission check when anonymous.
    pub fn require_user(&self) -> Result<&UserModel, Error> {
        self.user.as_ref().ok_or_else(|| self.denied())
    }

    fn denied(&self) -> Error {
        match self.user {
            Some(_) => AuthError::PermissionDenied.into(),
            None => AuthError::NotAuthenticated {
                challenge: P::SCHEMES.first().and_then(|scheme| scheme.challenge()),
            }
            .into(),
        }
    }
}

impl<P: AuthPolicy> FromRequestParts<AppState> for Caller<P> {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_service = AuthService::new(&state.db);

        for scheme in P::SCHEMES {
            let user = match scheme {
                AuthScheme::Basic => basic_user(parts, &auth_service).await?,
                AuthScheme::Token => token_user(parts, &auth_service).await?,
                AuthScheme::Session => session_user(parts, &auth_service).await?,
            };

            if let Some(user) = user {
                return Ok(Self::authenticated(user));
            }
        }

        Ok(Self::anonymous())
    }
}

/// Splits `Authorization: <keyword> <credentials>` when the keyword matches, case-insensitively.
///
/// `Ok(None)` when the header is absent or uses another keyword.
fn authorization_credentials<'a>(
    parts: &'a Parts,
    keyword: &str,
) -> Result<Option<Vec<&'a str>>, ()> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let header = header.to_str().map_err(|_| ())?;

    let mut words = header.split_whitespace();
    match words.next() {
        Some(word) if word.eq_ignore_ascii_case(keyword) => Ok(Some(words.collect())),
        _ => Ok(None),
    }
}

async fn token_user(parts: &Parts, auth_service: &AuthService<'_>) -> Result<Option<UserModel>, Error> {
    let credentials = authorization_credentials(parts, "token").map_err(|_| {
        AuthError::InvalidTokenHeader("Token string should not contain invalid characters.")
    })?;

    let Some(credentials) = credentials else {
        return Ok(None);
    };

    let key = match credentials.as_slice() {
        [key] => *key,
        [] => return Err(AuthError::InvalidTokenHeader("No credentials provided.").into()),
        _ => {
            return Err(
                AuthError::InvalidTokenHeader("Token string should not contain spaces.").into(),
            )
        }
    };

    auth_service.authenticate_token(key).await.map(Some)
}

async fn basic_user(parts: &Parts, auth_service: &AuthService<'_>) -> Result<Option<UserModel>, Error> {
    let credentials = authorization_credentials(parts, "basic")
        .map_err(|_| AuthError::InvalidBasicHeader("Credentials not correctly base64 encoded."))?;

    let Some(credentials) = credentials else {
        return Ok(None);
    };

    let encoded = match credentials.as_slice() {
        [encoded] => *encoded,
        [] => return Err(AuthError::InvalidBasicHeader("No credentials provided.").into()),
        _ => {
            return Err(AuthError::InvalidBasicHeader(
                "Credentials string should not include spaces.",
            )
            .into())
        }
    };

    let (username, password) = decode_basic_credentials(encoded)?;

    auth_service
        .authenticate_basic(&username, &password)
        .await
        .map(Some)
}

async fn session_user(parts: &Parts, auth_service: &AuthService<'_>) -> Result<Option<UserModel>, Error> {
    let Some(session) = parts.extensions.get::<Session>().cloned() else {
        return Ok(None);
    };

    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Ok(None);
    };

    let user = auth_service.session_user(user_id).await?;
    if user.is_none() {
        tracing::debug!(
            "Clearing session for user ID {} which no longer exists in database",
            user_id
        );
        SessionUserId::clear(&session).await?;
    }

    Ok(user)
}
