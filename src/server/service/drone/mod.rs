//! Drone and drone category services.

pub mod drone_category;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::drone::{DroneDto, DronePayload},
    server::{
        data::drone::{drone_category::DroneCategoryRepository, DroneChanges, DroneRepository, NewDrone},
        error::{validation::FieldErrors, Error},
        filter::drone::DroneFilter,
        model::db::DroneModel,
        service::{missing_object, parse_payload_bool, parse_payload_datetime},
        util::{pagination::PageRequest, url::ApiUrls},
    },
};

pub struct DroneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneService<'a> {
    /// Creates a new instance of [`DroneService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        filter: DroneFilter,
        page: PageRequest,
        urls: &ApiUrls,
    ) -> Result<(Vec<DroneDto>, u64), Error> {
        let (drones, count) = DroneRepository::new(self.db).list(filter, page).await?;

        Ok((self.to_dtos(drones, urls).await?, count))
    }

    pub async fn get(&self, id: i32, urls: &ApiUrls) -> Result<Option<DroneDto>, Error> {
        match self.get_model(id).await? {
            Some(drone) => Ok(Some(self.to_dto(drone, urls).await?)),
            None => Ok(None),
        }
    }

    /// Fetches the stored drone, used for ownership checks before writes
    pub async fn get_model(&self, id: i32) -> Result<Option<DroneModel>, Error> {
        Ok(DroneRepository::new(self.db).get_by_id(id).await?)
    }

    /// Registers a drone owned by `owner_id`.
    ///
    /// # Returns
    /// - `Ok(DroneDto)` - The created drone
    /// - `Err(Error::Validation)` - Missing or invalid fields, or an unknown category name
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        payload: DronePayload,
        owner_id: i32,
        urls: &ApiUrls,
    ) -> Result<DroneDto, Error> {
        let changes = self.validate(&payload, false).await?;

        let (Some(name), Some(drone_category_id), Some(manufacturing_date)) = (
            changes.name,
            changes.drone_category_id,
            changes.manufacturing_date,
        ) else {
            return Err(Error::InternalError(
                "Required drone fields missing after validation".to_string(),
            ));
        };

        let drone = DroneRepository::new(self.db)
            .create(NewDrone {
                name,
                drone_category_id,
                manufacturing_date,
                has_it_competed: changes.has_it_competed.unwrap_or(false),
                owner_id,
            })
            .await?;

        tracing::info!("User {} registered drone {} ({})", owner_id, drone.id, drone.name);

        self.to_dto(drone, urls).await
    }

    /// Applies a full (`partial == false`) or partial update; the owner never changes.
    pub async fn update(
        &self,
        drone: DroneModel,
        payload: DronePayload,
        partial: bool,
        urls: &ApiUrls,
    ) -> Result<DroneDto, Error> {
        let changes = self.validate(&payload, partial).await?;
        let drone = DroneRepository::new(self.db).update(drone, changes).await?;

        self.to_dto(drone, urls).await
    }

    /// Deletes a drone and its competitions, `false` when it does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let result = DroneRepository::new(self.db).delete(id).await?;

        Ok(result.rows_affected > 0)
    }

    /// Converts drones into DTOs, resolving category names and owner usernames.
    pub async fn to_dtos(&self, drones: Vec<DroneModel>, urls: &ApiUrls) -> Result<Vec<DroneDto>, Error> {
        let (categories, owners) = DroneRepository::new(self.db)
            .load_relations(&drones)
            .await?;

        drones
            .into_iter()
            .zip(categories)
            .zip(owners)
            .map(|((drone, category), owner)| {
                let category = category.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Drone {} references missing category {}",
                        drone.id, drone.drone_category_id
                    ))
                })?;
                let owner = owner.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Drone {} references missing owner {}",
                        drone.id, drone.owner_id
                    ))
                })?;

                Ok(DroneDto {
                    url: urls.drone(drone.id),
                    name: drone.name,
                    drone_category: category.name,
                    owner: owner.username,
                    manufacturing_date: drone.manufacturing_date,
                    has_it_competed: drone.has_it_competed,
                    inserted_timestamp: drone.inserted_timestamp,
                })
            })
            .collect()
    }

    async fn to_dto(&self, drone: DroneModel, urls: &ApiUrls) -> Result<DroneDto, Error> {
        let drone_id = drone.id;

        self.to_dtos(vec![drone], urls)
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError(format!("Failed to build DTO for drone {}", drone_id)))
    }

    async fn validate(&self, payload: &DronePayload, partial: bool) -> Result<DroneChanges, Error> {
        let mut errors = FieldErrors::validate(payload);
        if !partial {
            errors.require("name", &payload.name);
            errors.require("drone_category", &payload.drone_category);
            errors.require("manufacturing_date", &payload.manufacturing_date);
        }

        let manufacturing_date =
            parse_payload_datetime(&mut errors, "manufacturing_date", &payload.manufacturing_date);
        let has_it_competed =
            parse_payload_bool(&mut errors, "has_it_competed", &payload.has_it_competed);

        let mut drone_category_id = None;
        if let Some(category_name) = payload.drone_category.as_deref() {
            match DroneCategoryRepository::new(self.db)
                .get_by_name(category_name)
                .await?
            {
                Some(category) => drone_category_id = Some(category.id),
                None => errors.add("drone_category", missing_object(category_name)),
            }
        }

        errors.into_result()?;

        Ok(DroneChanges {
            name: payload.name.clone(),
            drone_category_id,
            manufacturing_date,
            has_it_competed,
        })
    }
}
