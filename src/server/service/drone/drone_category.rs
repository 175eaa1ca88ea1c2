use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::drone_category::{DroneCategoryDto, DroneCategoryPayload},
    server::{
        data::drone::drone_category::DroneCategoryRepository,
        error::{validation::FieldErrors, Error},
        filter::drone_category::DroneCategoryFilter,
        model::db::DroneCategoryModel,
        util::{pagination::PageRequest, url::ApiUrls},
    },
};

static DUPLICATE_NAME_MESSAGE: &str = "drone category with this name already exists.";

pub struct DroneCategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneCategoryService<'a> {
    /// Creates a new instance of [`DroneCategoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of categories, each with links to its drones.
    pub async fn list(
        &self,
        filter: DroneCategoryFilter,
        page: PageRequest,
        urls: &ApiUrls,
    ) -> Result<(Vec<DroneCategoryDto>, u64), Error> {
        let repo = DroneCategoryRepository::new(self.db);
        let (categories, count) = repo.list(filter, page).await?;

        Ok((self.to_dtos(categories, urls).await?, count))
    }

    pub async fn get(&self, id: i32, urls: &ApiUrls) -> Result<Option<DroneCategoryDto>, Error> {
        let repo = DroneCategoryRepository::new(self.db);

        match repo.get_by_id(id).await? {
            Some(category) => Ok(self.to_dtos(vec![category], urls).await?.pop()),
            None => Ok(None),
        }
    }

    /// Creates a category after checking the name is present and unused.
    ///
    /// # Returns
    /// - `Ok(DroneCategoryDto)` - The created category
    /// - `Err(Error::Validation)` - Name missing, blank, too long or already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        payload: DroneCategoryPayload,
        urls: &ApiUrls,
    ) -> Result<DroneCategoryDto, Error> {
        let name = self.validate(&payload, None, false).await?.ok_or_else(|| {
            Error::InternalError("Category name missing after validation".to_string())
        })?;

        let category = DroneCategoryRepository::new(self.db)
            .create(name)
            .await
            .map_err(name_conflict)?;

        tracing::info!("Created drone category {} ({})", category.id, category.name);

        Ok(DroneCategoryDto {
            url: urls.drone_category(category.id),
            pk: category.id,
            name: category.name,
            drones: Vec::new(),
        })
    }

    /// Updates a category; `partial` allows the name to be omitted.
    ///
    /// Returns `Ok(None)` when no category has the given ID.
    pub async fn update(
        &self,
        id: i32,
        payload: DroneCategoryPayload,
        partial: bool,
        urls: &ApiUrls,
    ) -> Result<Option<DroneCategoryDto>, Error> {
        let repo = DroneCategoryRepository::new(self.db);

        let Some(category) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let category = match self.validate(&payload, Some(id), partial).await? {
            Some(name) => repo.update(category, name).await.map_err(name_conflict)?,
            None => category,
        };

        Ok(self.to_dtos(vec![category], urls).await?.pop())
    }

    /// Deletes a category and, by cascade, its drones and their competitions.
    ///
    /// Returns `false` when no category has the given ID.
    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let result = DroneCategoryRepository::new(self.db).delete(id).await?;

        if result.rows_affected > 0 {
            tracing::info!("Deleted drone category {}", id);
        }

        Ok(result.rows_affected > 0)
    }

    /// Validates the payload, returning the name to store if one was supplied
    async fn validate(
        &self,
        payload: &DroneCategoryPayload,
        exclude_id: Option<i32>,
        partial: bool,
    ) -> Result<Option<String>, Error> {
        let mut errors = FieldErrors::validate(payload);
        if !partial {
            errors.require("name", &payload.name);
        }

        if let Some(name) = payload.name.as_deref() {
            if errors.get("name").is_none()
                && DroneCategoryRepository::new(self.db)
                    .name_exists(name, exclude_id)
                    .await?
            {
                errors.add("name", DUPLICATE_NAME_MESSAGE);
            }
        }

        errors.into_result()?;

        Ok(payload.name.clone())
    }

    async fn to_dtos(
        &self,
        categories: Vec<DroneCategoryModel>,
        urls: &ApiUrls,
    ) -> Result<Vec<DroneCategoryDto>, Error> {
        let repo = DroneCategoryRepository::new(self.db);
        let drones = repo.load_drones(&categories).await?;

        Ok(categories
            .into_iter()
            .zip(drones)
            .map(|(category, drones)| DroneCategoryDto {
                url: urls.drone_category(category.id),
                pk: category.id,
                name: category.name,
                drones: drones.iter().map(|drone| urls.drone(drone.id)).collect(),
            })
            .collect())
    }
}

/// Reports a unique index hit on the name as the same field error the pre-check gives.
///
/// Two writers can both pass [`DroneCategoryService::validate`] before either commits.
pub(super) fn name_conflict(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            let mut errors = FieldErrors::new();
            errors.add("name", DUPLICATE_NAME_MESSAGE);
            Error::Validation(errors)
        }
        _ => Error::DbErr(err),
    }
}
