use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::{
    filter::drone_category::DroneCategoryFilter,
    model::db::{DroneCategoryModel, DroneModel},
    util::pagination::PageRequest,
};

pub struct DroneCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DroneCategoryRepository<'a, C> {
    /// Creates a new instance of [`DroneCategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<DroneCategoryModel, DbErr> {
        let category = entity::drone_category::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<DroneCategoryModel>, DbErr> {
        entity::prelude::DroneCategory::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<DroneCategoryModel>, DbErr> {
        entity::prelude::DroneCategory::find()
            .filter(entity::drone_category::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Whether another category already uses `name`, ignoring the category `exclude_id`
    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::DroneCategory::find()
            .filter(entity::drone_category::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::drone_category::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Returns one page of categories matching the filter along with the total match count
    pub async fn list(
        &self,
        filter: DroneCategoryFilter,
        page: PageRequest,
    ) -> Result<(Vec<DroneCategoryModel>, u64), DbErr> {
        let query = filter.apply(entity::prelude::DroneCategory::find());

        let count = query.clone().count(self.db).await?;
        let categories = query
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        Ok((categories, count))
    }

    /// Loads the drones of each category, by drone name
    pub async fn load_drones(
        &self,
        categories: &[DroneCategoryModel],
    ) -> Result<Vec<Vec<DroneModel>>, DbErr> {
        categories
            .load_many(
                entity::prelude::Drone::find().order_by_asc(entity::drone::Column::Name),
                self.db,
            )
            .await
    }

    pub async fn update(
        &self,
        category: DroneCategoryModel,
        name: String,
    ) -> Result<DroneCategoryModel, DbErr> {
        let mut category_am = category.into_active_model();
        category_am.name = ActiveValue::Set(name);

        category_am.update(self.db).await
    }

    /// Deletes a category together with its drones and their competitions
    ///
    /// Returns OK regardless of the category existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DroneCategory::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
