//! Authentication and authorization services.
//!
//! Credentials arrive three ways: an `Authorization: Token` header, an
//! `Authorization: Basic` header, or a session cookie set by logging in. This module
//! resolves each of them to a user; [`permission`] decides what that user may do.

pub mod login;
pub mod permission;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{token::TokenRepository, UserRepository},
    error::{auth::AuthError, Error},
    model::db::UserModel,
    util::crypto::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the user owning an API token.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The token's user
    /// - `Err(Error::AuthError(AuthError::InvalidToken))` - No such token
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn authenticate_token(&self, key: &str) -> Result<UserModel, Error> {
        match TokenRepository::new(self.db).get_by_key(key).await? {
            Some((_, Some(user))) => Ok(user),
            Some((token, None)) => Err(Error::InternalError(format!(
                "Token references missing user {}",
                token.user_id
            ))),
            None => Err(AuthError::InvalidToken.into()),
        }
    }

    /// Checks a username and password, `Ok(None)` when they do not match a user.
    pub async fn check_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserModel>, Error> {
        let user = UserRepository::new(self.db).get_by_username(username).await?;

        Ok(user.filter(|user| verify_password(password, &user.password_hash)))
    }

    /// Resolves HTTP basic credentials to a user.
    pub async fn authenticate_basic(&self, username: &str, password: &str) -> Result<UserModel, Error> {
        self.check_credentials(username, password)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials.into())
    }

    /// Resolves the user stored in a session, `Ok(None)` if the account no longer exists.
    pub async fn session_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db).get_by_id(user_id).await?)
    }
}
