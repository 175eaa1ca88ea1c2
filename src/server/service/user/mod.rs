//! User account services.

use sea_orm::DatabaseConnection;

use crate::{
    model::{drone::UserDroneDto, user::UserDto},
    server::{
        data::user::UserRepository,
        error::Error,
        model::db::UserModel,
        util::{crypto::hash_password, pagination::PageRequest, url::ApiUrls},
    },
};

/// Service for user accounts and the drones they own.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, page: PageRequest, urls: &ApiUrls) -> Result<(Vec<UserDto>, u64), Error> {
        let (users, count) = UserRepository::new(self.db).list(page).await?;

        Ok((self.to_dtos(users, urls).await?, count))
    }

    pub async fn get(&self, user_id: i32, urls: &ApiUrls) -> Result<Option<UserDto>, Error> {
        match UserRepository::new(self.db).get_by_id(user_id).await? {
            Some(user) => Ok(self.to_dtos(vec![user], urls).await?.pop()),
            None => Ok(None),
        }
    }

    /// Creates the user unless the username is already taken.
    ///
    /// An existing user keeps its current password.
    ///
    /// # Returns
    /// - `Ok((UserModel, true))` - The user was created
    /// - `Ok((UserModel, false))` - A user with that username already existed
    /// - `Err(Error::InternalError)` - The password could not be hashed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_or_create_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(UserModel, bool), Error> {
        let repo = UserRepository::new(self.db);

        if let Some(user) = repo.get_by_username(username).await? {
            return Ok((user, false));
        }

        let password_hash = hash_password(password)?;
        let user = repo.create(username.to_string(), password_hash).await?;

        Ok((user, true))
    }

    pub(crate) async fn to_dtos(&self, users: Vec<UserModel>, urls: &ApiUrls) -> Result<Vec<UserDto>, Error> {
        let drones = UserRepository::new(self.db).load_drones(&users).await?;

        Ok(users
            .into_iter()
            .zip(drones)
            .map(|(user, drones)| UserDto {
                url: urls.user(user.id),
                pk: user.id,
                username: user.username,
                drones: drones
                    .into_iter()
                    .map(|drone| UserDroneDto {
                        url: urls.drone(drone.id),
                        name: drone.name,
                    })
                    .collect(),
            })
            .collect())
    }
}
