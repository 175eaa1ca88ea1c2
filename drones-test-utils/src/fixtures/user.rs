use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is [`TEST_PASSWORD`].
    pub async fn insert_user(&self, username: &str) -> Result<entity::auth_user::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        Ok(
            entity::prelude::AuthUser::insert(entity::auth_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert an auth token for the user; the key is derived from the user ID.
    pub async fn insert_token(&self, user_id: i32) -> Result<entity::auth_token::Model, TestError> {
        Ok(
            entity::prelude::AuthToken::insert(entity::auth_token::ActiveModel {
                key: ActiveValue::Set(format!("{:040x}", user_id)),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(Utc::now()),
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a user together with an auth token.
    pub async fn insert_user_with_token(
        &self,
        username: &str,
    ) -> Result<(entity::auth_user::Model, entity::auth_token::Model), TestError> {
        let user = self.insert_user(username).await?;
        let token = self.insert_token(user.id).await?;

        Ok((user, token))
    }
}
