pub mod drone_category;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::{
    filter::drone::DroneFilter,
    model::db::{DroneCategoryModel, DroneModel, UserModel},
    util::pagination::PageRequest,
};

/// Fields of a drone to be inserted.
#[derive(Clone, Debug)]
pub struct NewDrone {
    pub name: String,
    pub drone_category_id: i32,
    pub manufacturing_date: DateTime<Utc>,
    pub has_it_competed: bool,
    pub owner_id: i32,
}

/// Drone fields to overwrite, `None` keeps the stored value.
///
/// The owner is fixed at creation and has no entry here.
#[derive(Clone, Debug, Default)]
pub struct DroneChanges {
    pub name: Option<String>,
    pub drone_category_id: Option<i32>,
    pub manufacturing_date: Option<DateTime<Utc>>,
    pub has_it_competed: Option<bool>,
}

pub struct DroneRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DroneRepository<'a, C> {
    /// Creates a new instance of [`DroneRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, drone: NewDrone) -> Result<DroneModel, DbErr> {
        let drone = entity::drone::ActiveModel {
            name: ActiveValue::Set(drone.name),
            drone_category_id: ActiveValue::Set(drone.drone_category_id),
            manufacturing_date: ActiveValue::Set(drone.manufacturing_date),
            has_it_competed: ActiveValue::Set(drone.has_it_competed),
            owner_id: ActiveValue::Set(drone.owner_id),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        drone.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<DroneModel>, DbErr> {
        entity::prelude::Drone::find_by_id(id).one(self.db).await
    }

    /// Finds a drone by its name
    ///
    /// Drone names are not unique, the first match by primary key is returned.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<DroneModel>, DbErr> {
        entity::prelude::Drone::find()
            .filter(entity::drone::Column::Name.eq(name))
            .order_by_asc(entity::drone::Column::Id)
            .one(self.db)
            .await
    }

    /// Returns one page of drones matching the filter along with the total match count
    pub async fn list(
        &self,
        filter: DroneFilter,
        page: PageRequest,
    ) -> Result<(Vec<DroneModel>, u64), DbErr> {
        let query = filter.apply(entity::prelude::Drone::find());

        let count = query.clone().count(self.db).await?;
        let drones = query
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        Ok((drones, count))
    }

    /// Fetches drones by primary key, in no particular order
    pub async fn get_many(&self, ids: &[i32]) -> Result<Vec<DroneModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Drone::find()
            .filter(entity::drone::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Loads the category and owner of each drone
    pub async fn load_relations(
        &self,
        drones: &[DroneModel],
    ) -> Result<(Vec<Option<DroneCategoryModel>>, Vec<Option<UserModel>>), DbErr> {
        let categories = drones
            .load_one(entity::prelude::DroneCategory, self.db)
            .await?;
        let owners = drones.load_one(entity::prelude::AuthUser, self.db).await?;

        Ok((categories, owners))
    }

    pub async fn update(&self, drone: DroneModel, changes: DroneChanges) -> Result<DroneModel, DbErr> {
        let mut drone_am = drone.clone().into_active_model();

        if let Some(name) = changes.name {
            drone_am.name = ActiveValue::Set(name);
        }
        if let Some(drone_category_id) = changes.drone_category_id {
            drone_am.drone_category_id = ActiveValue::Set(drone_category_id);
        }
        if let Some(manufacturing_date) = changes.manufacturing_date {
            drone_am.manufacturing_date = ActiveValue::Set(manufacturing_date);
        }
        if let Some(has_it_competed) = changes.has_it_competed {
            drone_am.has_it_competed = ActiveValue::Set(has_it_competed);
        }

        if !drone_am.is_changed() {
            return Ok(drone);
        }

        drone_am.update(self.db).await
    }

    /// Deletes a drone together with its competitions
    ///
    /// Returns OK regardless of the drone existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Drone::delete_by_id(id).exec(self.db).await
    }
}
