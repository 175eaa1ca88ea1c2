pub use sea_orm_migration::prelude::*;

mod m20251017_000001_drone_category;
mod m20251017_000002_auth_user;
mod m20251017_000003_drone;
mod m20251017_000004_pilot;
mod m20251017_000005_competition;
mod m20251017_000006_auth_token;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_drone_category::Migration),
            Box::new(m20251017_000002_auth_user::Migration),
            Box::new(m20251017_000003_drone::Migration),
            Box::new(m20251017_000004_pilot::Migration),
            Box::new(m20251017_000005_competition::Migration),
            Box::new(m20251017_000006_auth_token::Migration),
        ]
    }
}
