use chrono::Utc;
use entity::pilot::Gender;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::mock_date, TestContext};

impl TestContext {
    pub fn pilot<'a>(&'a mut self) -> PilotFixtures<'a> {
        PilotFixtures { test: self }
    }
}

pub struct PilotFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> PilotFixtures<'a> {
    pub async fn insert_pilot(
        &self,
        name: &str,
        gender: Gender,
        races_count: i32,
    ) -> Result<entity::pilot::Model, TestError> {
        Ok(
            entity::prelude::Pilot::insert(entity::pilot::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                gender: ActiveValue::Set(gender),
                races_count: ActiveValue::Set(races_count),
                inserted_timestamp: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a competition achieved `days` after the fixture reference date.
    pub async fn insert_competition(
        &self,
        pilot_id: i32,
        drone_id: i32,
        distance_in_feet: i32,
        days: i64,
    ) -> Result<entity::competition::Model, TestError> {
        Ok(
            entity::prelude::Competition::insert(entity::competition::ActiveModel {
                pilot_id: ActiveValue::Set(pilot_id),
                drone_id: ActiveValue::Set(drone_id),
                distance_in_feet: ActiveValue::Set(distance_in_feet),
                distance_achievement_date: ActiveValue::Set(mock_date(days)),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
