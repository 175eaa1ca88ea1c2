use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, LoaderTrait, PaginatorTrait, QuerySelect,
};

use crate::server::{
    filter::competition::CompetitionFilter,
    model::db::{CompetitionModel, DroneModel, PilotModel},
    util::pagination::PageRequest,
};

#[derive(Clone, Debug)]
pub struct NewCompetition {
    pub pilot_id: i32,
    pub drone_id: i32,
    pub distance_in_feet: i32,
    pub distance_achievement_date: DateTime<Utc>,
}

/// Competition fields to overwrite, `None` keeps the stored value.
#[derive(Clone, Debug, Default)]
pub struct CompetitionChanges {
    pub pilot_id: Option<i32>,
    pub drone_id: Option<i32>,
    pub distance_in_feet: Option<i32>,
    pub distance_achievement_date: Option<DateTime<Utc>>,
}

pub struct CompetitionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompetitionRepository<'a, C> {
    /// Creates a new instance of [`CompetitionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, competition: NewCompetition) -> Result<CompetitionModel, DbErr> {
        let competition = entity::competition::ActiveModel {
            pilot_id: ActiveValue::Set(competition.pilot_id),
            drone_id: ActiveValue::Set(competition.drone_id),
            distance_in_feet: ActiveValue::Set(competition.distance_in_feet),
            distance_achievement_date: ActiveValue::Set(competition.distance_achievement_date),
            ..Default::default()
        };

        competition.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CompetitionModel>, DbErr> {
        entity::prelude::Competition::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Returns one page of competitions matching the filter along with the total match count
    pub async fn list(
        &self,
        filter: CompetitionFilter,
        page: PageRequest,
    ) -> Result<(Vec<CompetitionModel>, u64), DbErr> {
        let query = filter.apply(entity::prelude::Competition::find());

        let count = query.clone().count(self.db).await?;
        let competitions = query
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        Ok((competitions, count))
    }

    /// Loads the pilot and drone of each competition
    pub async fn load_relations(
        &self,
        competitions: &[CompetitionModel],
    ) -> Result<(Vec<Option<PilotModel>>, Vec<Option<DroneModel>>), DbErr> {
        let pilots = competitions
            .load_one(entity::prelude::Pilot, self.db)
            .await?;
        let drones = competitions
            .load_one(entity::prelude::Drone, self.db)
            .await?;

        Ok((pilots, drones))
    }

    pub async fn update(
        &self,
        competition: CompetitionModel,
        changes: CompetitionChanges,
    ) -> Result<CompetitionModel, DbErr> {
        let mut competition_am = competition.clone().into_active_model();

        if let Some(pilot_id) = changes.pilot_id {
            competition_am.pilot_id = ActiveValue::Set(pilot_id);
        }
        if let Some(drone_id) = changes.drone_id {
            competition_am.drone_id = ActiveValue::Set(drone_id);
        }
        if let Some(distance_in_feet) = changes.distance_in_feet {
            competition_am.distance_in_feet = ActiveValue::Set(distance_in_feet);
        }
        if let Some(date) = changes.distance_achievement_date {
            competition_am.distance_achievement_date = ActiveValue::Set(date);
        }

        if !competition_am.is_changed() {
            return Ok(competition);
        }

        competition_am.update(self.db).await
    }

    /// Deletes a competition
    ///
    /// Returns OK regardless of the competition existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Competition::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
