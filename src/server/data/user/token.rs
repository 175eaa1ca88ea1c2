use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::{TokenModel, UserModel};

pub struct TokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TokenRepository<'a, C> {
    /// Creates a new instance of [`TokenRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, key: String) -> Result<TokenModel, DbErr> {
        let token = entity::auth_token::ActiveModel {
            key: ActiveValue::Set(key),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        };

        token.insert(self.db).await
    }

    /// Finds a token by key along with the user it belongs to
    pub async fn get_by_key(
        &self,
        key: &str,
    ) -> Result<Option<(TokenModel, Option<UserModel>)>, DbErr> {
        entity::prelude::AuthToken::find_by_id(key.to_string())
            .find_also_related(entity::auth_user::Entity)
            .one(self.db)
            .await
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Option<TokenModel>, DbErr> {
        entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}
