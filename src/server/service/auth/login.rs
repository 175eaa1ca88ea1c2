use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::{auth::CredentialsPayload, user::UserDto},
    server::{
        error::{auth::AuthError, validation::FieldErrors, Error},
        model::session::user::SessionUserId,
        service::{auth::AuthService, user::UserService},
        util::url::ApiUrls,
    },
};

pub struct LoginService<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> LoginService<'a> {
    /// Creates a new instance of [`LoginService`]
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Verifies credentials and stores the user in the session.
    ///
    /// The session ID is cycled on login.
    pub async fn login(&self, payload: CredentialsPayload, urls: &ApiUrls) -> Result<UserDto, Error> {
        FieldErrors::validate(&payload).into_result()?;
        let (Some(username), Some(password)) = (payload.username, payload.password) else {
            return Err(Error::InternalError("Credentials missing after validation".to_string()));
        };

        let user = AuthService::new(self.db)
            .check_credentials(&username, &password)
            .await?
            .ok_or(AuthError::LoginFailed)?;

        self.session.cycle_id().await?;
        SessionUserId::insert(self.session, user.id).await?;

        tracing::debug!("User {} logged in", user.id);

        UserService::new(self.db)
            .to_dtos(vec![user], urls)
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError("Failed to build DTO for logged in user".to_string()))
    }

    /// Clears the session
    pub async fn logout(&self) -> Result<(), Error> {
        SessionUserId::clear(self.session).await
    }
}
