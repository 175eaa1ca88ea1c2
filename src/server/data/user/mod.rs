pub mod token;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, LoaderTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::db::{DroneModel, UserModel},
    util::pagination::PageRequest,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user from an already hashed password
    pub async fn create(&self, username: String, password_hash: String) -> Result<UserModel, DbErr> {
        let user = entity::auth_user::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::AuthUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::AuthUser::find()
            .filter(entity::auth_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Returns one page of users by primary key along with the total user count
    pub async fn list(&self, page: PageRequest) -> Result<(Vec<UserModel>, u64), DbErr> {
        let query = entity::prelude::AuthUser::find().order_by_asc(entity::auth_user::Column::Id);

        let count = query.clone().count(self.db).await?;
        let users = query
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        Ok((users, count))
    }

    /// Loads the drones owned by each user, by drone name
    pub async fn load_drones(&self, users: &[UserModel]) -> Result<Vec<Vec<DroneModel>>, DbErr> {
        users
            .load_many(
                entity::prelude::Drone::find().order_by_asc(entity::drone::Column::Name),
                self.db,
            )
            .await
    }
}
