pub mod competition;

use chrono::Utc;
use entity::pilot::Gender;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::{
    filter::pilot::PilotFilter,
    model::db::{CompetitionModel, PilotModel},
    util::pagination::PageRequest,
};

#[derive(Clone, Debug)]
pub struct NewPilot {
    pub name: String,
    pub gender: Gender,
    pub races_count: i32,
}

/// Pilot fields to overwrite, `None` keeps the stored value.
#[derive(Clone, Debug, Default)]
pub struct PilotChanges {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub races_count: Option<i32>,
}

pub struct PilotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PilotRepository<'a, C> {
    /// Creates a new instance of [`PilotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, pilot: NewPilot) -> Result<PilotModel, DbErr> {
        let pilot = entity::pilot::ActiveModel {
            name: ActiveValue::Set(pilot.name),
            gender: ActiveValue::Set(pilot.gender),
            races_count: ActiveValue::Set(pilot.races_count),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        pilot.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PilotModel>, DbErr> {
        entity::prelude::Pilot::find_by_id(id).one(self.db).await
    }

    /// Finds a pilot by name, the first match by primary key when names repeat
    pub async fn get_by_name(&self, name: &str) -> Result<Option<PilotModel>, DbErr> {
        entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Name.eq(name))
            .order_by_asc(entity::pilot::Column::Id)
            .one(self.db)
            .await
    }

    /// Returns one page of pilots matching the filter along with the total match count
    pub async fn list(
        &self,
        filter: PilotFilter,
        page: PageRequest,
    ) -> Result<(Vec<PilotModel>, u64), DbErr> {
        let query = filter.apply(entity::prelude::Pilot::find());

        let count = query.clone().count(self.db).await?;
        let pilots = query
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        Ok((pilots, count))
    }

    /// Loads the competitions of each pilot, longest distance first
    pub async fn load_competitions(
        &self,
        pilots: &[PilotModel],
    ) -> Result<Vec<Vec<CompetitionModel>>, DbErr> {
        pilots
            .load_many(
                entity::prelude::Competition::find()
                    .order_by_desc(entity::competition::Column::DistanceInFeet)
                    .order_by_asc(entity::competition::Column::Id),
                self.db,
            )
            .await
    }

    pub async fn update(&self, pilot: PilotModel, changes: PilotChanges) -> Result<PilotModel, DbErr> {
        let mut pilot_am = pilot.clone().into_active_model();

        if let Some(name) = changes.name {
            pilot_am.name = ActiveValue::Set(name);
        }
        if let Some(gender) = changes.gender {
            pilot_am.gender = ActiveValue::Set(gender);
        }
        if let Some(races_count) = changes.races_count {
            pilot_am.races_count = ActiveValue::Set(races_count);
        }

        if !pilot_am.is_changed() {
            return Ok(pilot);
        }

        pilot_am.update(self.db).await
    }

    /// Deletes a pilot together with their competitions
    ///
    /// Returns OK regardless of the pilot existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pilot::delete_by_id(id).exec(self.db).await
    }
}
