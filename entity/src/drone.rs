use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub name: String,
    pub drone_category_id: i32,
    pub manufacturing_date: DateTimeUtc,
    pub has_it_competed: bool,
    pub owner_id: i32,
    pub inserted_timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::drone_category::Entity",
        from = "Column::DroneCategoryId",
        to = "super::drone_category::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    DroneCategory,
    #[sea_orm(
        belongs_to = "super::auth_user::Entity",
        from = "Column::OwnerId",
        to = "super::auth_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::competition::Entity")]
    Competition,
}

impl Related<super::drone_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DroneCategory.def()
    }
}

impl Related<super::auth_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::competition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Competition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
