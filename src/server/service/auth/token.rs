use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{CredentialsPayload, TokenDto},
    server::{
        data::user::token::TokenRepository,
        error::{auth::AuthError, validation::FieldErrors, Error},
        service::auth::AuthService,
        util::crypto::generate_token,
    },
};

pub struct TokenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenService<'a> {
    /// Creates a new instance of [`TokenService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Exchanges a username and password for the user's API token.
    ///
    /// The token is created on the first successful call and returned unchanged afterwards.
    ///
    /// # Returns
    /// - `Ok(TokenDto)` - The user's token
    /// - `Err(Error::Validation)` - Username or password missing
    /// - `Err(Error::AuthError(AuthError::LoginFailed))` - Credentials do not match a user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn obtain_token(&self, payload: CredentialsPayload) -> Result<TokenDto, Error> {
        FieldErrors::validate(&payload).into_result()?;
        let (Some(username), Some(password)) = (payload.username, payload.password) else {
            return Err(Error::InternalError("Credentials missing after validation".to_string()));
        };

        let user = AuthService::new(self.db)
            .check_credentials(&username, &password)
            .await?
            .ok_or(AuthError::LoginFailed)?;

        let repo = TokenRepository::new(self.db);
        let token = match repo.get_by_user_id(user.id).await? {
            Some(token) => token,
            None => {
                tracing::info!("Issuing API token for user {}", user.id);
                repo.create(user.id, generate_token()).await?
            }
        };

        Ok(TokenDto { token: token.key })
    }
}

#[cfg(test)]
mod tests {
    use drones_test_utils::prelude::*;

    use crate::{
        model::auth::CredentialsPayload,
        server::{
            error::{auth::AuthError, Error},
            service::auth::token::TokenService,
        },
    };

    fn credentials(password: &str) -> CredentialsPayload {
        CredentialsPayload {
            username: Some(TEST_USERNAME.to_string()),
            password: Some(password.to_string()),
        }
    }

    /// Expect the same token on repeated requests
    #[tokio::test]
    async fn reuses_issued_token() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_user(TEST_USERNAME)
            .build()
            .await?;

        let token_service = TokenService::new(&test.db);
        let first = token_service.obtain_token(credentials(TEST_PASSWORD)).await.unwrap();
        let second = token_service.obtain_token(credentials(TEST_PASSWORD)).await.unwrap();

        assert_eq!(first.token.len(), 40);
        assert_eq!(first.token, second.token);

        Ok(())
    }

    /// Expect LoginFailed for a wrong password
    #[tokio::test]
    async fn rejects_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_drone_tables()
            .with_user(TEST_USERNAME)
            .build()
            .await?;

        let token_service = TokenService::new(&test.db);
        let result = token_service.obtain_token(credentials("wrong")).await;

        assert!(matches!(result, Err(Error::AuthError(AuthError::LoginFailed))));

        Ok(())
    }

    /// Expect a validation error when the password is missing
    #[tokio::test]
    async fn requires_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_drone_tables().build().await?;

        let token_service = TokenService::new(&test.db);
        let result = token_service
            .obtain_token(CredentialsPayload {
                username: Some(TEST_USERNAME.to_string()),
                password: None,
            })
            .await;

        assert!(matches!(result, Err(Error::Validation(ref errors)) if errors.get("password").is_some()));

        Ok(())
    }
}
