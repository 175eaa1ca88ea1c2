use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_drone_category::DroneCategory, m20251017_000002_auth_user::AuthUser};

static IDX_DRONE_DRONE_CATEGORY_ID: &str = "idx-drone-drone_category_id";
static IDX_DRONE_OWNER_ID: &str = "idx-drone-owner_id";
static FK_DRONE_DRONE_CATEGORY_ID: &str = "fk-drone-drone_category_id";
static FK_DRONE_OWNER_ID: &str = "fk-drone-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drone::Table)
                    .if_not_exists()
                    .col(pk_auto(Drone::Id))
                    .col(string_len(Drone::Name, 250))
                    .col(integer(Drone::DroneCategoryId))
                    .col(timestamp_with_time_zone(Drone::ManufacturingDate))
                    .col(boolean(Drone::HasItCompeted).default(false))
                    .col(integer(Drone::OwnerId))
                    .col(timestamp_with_time_zone(Drone::InsertedTimestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DRONE_DRONE_CATEGORY_ID)
                            .from(Drone::Table, Drone::DroneCategoryId)
                            .to(DroneCategory::Table, DroneCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DRONE_OWNER_ID)
                            .from(Drone::Table, Drone::OwnerId)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DRONE_DRONE_CATEGORY_ID)
                    .table(Drone::Table)
                    .col(Drone::DroneCategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DRONE_OWNER_ID)
                    .table(Drone::Table)
                    .col(Drone::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DRONE_OWNER_ID)
                    .table(Drone::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DRONE_DRONE_CATEGORY_ID)
                    .table(Drone::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Drone::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Drone {
    Table,
    Id,
    Name,
    DroneCategoryId,
    ManufacturingDate,
    HasItCompeted,
    OwnerId,
    InsertedTimestamp,
}
