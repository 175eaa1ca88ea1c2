use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::mock_date, TestContext};

impl TestContext {
    pub fn drone<'a>(&'a mut self) -> DroneFixtures<'a> {
        DroneFixtures { test: self }
    }
}

pub struct DroneFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> DroneFixtures<'a> {
    pub async fn insert_category(
        &self,
        name: &str,
    ) -> Result<entity::drone_category::Model, TestError> {
        Ok(
            entity::prelude::DroneCategory::insert(entity::drone_category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a drone manufactured on [`mock_date(0)`](crate::fixtures::mock_date).
    pub async fn insert_drone(
        &self,
        name: &str,
        drone_category_id: i32,
        owner_id: i32,
    ) -> Result<entity::drone::Model, TestError> {
        Ok(
            entity::prelude::Drone::insert(entity::drone::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                drone_category_id: ActiveValue::Set(drone_category_id),
                manufacturing_date: ActiveValue::Set(mock_date(0)),
                has_it_competed: ActiveValue::Set(false),
                owner_id: ActiveValue::Set(owner_id),
                inserted_timestamp: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a category named after the drone plus the drone itself.
    pub async fn insert_drone_with_category(
        &self,
        name: &str,
        owner_id: i32,
    ) -> Result<(entity::drone_category::Model, entity::drone::Model), TestError> {
        let category = self.insert_category(&format!("{} category", name)).await?;
        let drone = self.insert_drone(name, category.id, owner_id).await?;

        Ok((category, drone))
    }
}
