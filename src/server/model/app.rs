use sea_orm::DatabaseConnection;

use crate::server::util::pagination::PaginationConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub pagination: PaginationConfig,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            pagination: PaginationConfig::default(),
        }
    }
}
