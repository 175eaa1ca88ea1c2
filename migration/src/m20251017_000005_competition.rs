use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000003_drone::Drone, m20251017_000004_pilot::Pilot};

static IDX_COMPETITION_PILOT_ID: &str = "idx-competition-pilot_id";
static IDX_COMPETITION_DRONE_ID: &str = "idx-competition-drone_id";
static IDX_COMPETITION_DISTANCE_IN_FEET: &str = "idx-competition-distance_in_feet";
static FK_COMPETITION_PILOT_ID: &str = "fk-competition-pilot_id";
static FK_COMPETITION_DRONE_ID: &str = "fk-competition-drone_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Competition::Table)
                    .if_not_exists()
                    .col(pk_auto(Competition::Id))
                    .col(integer(Competition::PilotId))
                    .col(integer(Competition::DroneId))
                    .col(integer(Competition::DistanceInFeet))
                    .col(timestamp_with_time_zone(
                        Competition::DistanceAchievementDate,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMPETITION_PILOT_ID)
                            .from(Competition::Table, Competition::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMPETITION_DRONE_ID)
                            .from(Competition::Table, Competition::DroneId)
                            .to(Drone::Table, Drone::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_COMPETITION_PILOT_ID, Competition::PilotId),
            (IDX_COMPETITION_DRONE_ID, Competition::DroneId),
            (IDX_COMPETITION_DISTANCE_IN_FEET, Competition::DistanceInFeet),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Competition::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_COMPETITION_DISTANCE_IN_FEET,
            IDX_COMPETITION_DRONE_ID,
            IDX_COMPETITION_PILOT_ID,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(Competition::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Competition::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Competition {
    Table,
    Id,
    PilotId,
    DroneId,
    DistanceInFeet,
    DistanceAchievementDate,
}
