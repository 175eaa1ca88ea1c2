use sea_orm::DatabaseConnection;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{config::Config, error::Error, service::user::UserService};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured superuser unless an account with that username already exists.
pub async fn ensure_superuser(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    let Some(superuser) = &config.superuser else {
        return Ok(());
    };

    let (user, created) = UserService::new(db)
        .get_or_create_user(&superuser.username, &superuser.password)
        .await?;

    if created {
        tracing::info!("Created superuser {} ({})", user.username, user.id);
    }

    Ok(())
}

/// Configure in-memory session management
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    use tower_sessions::{cookie::time::Duration, cookie::SameSite, Expiry};

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
