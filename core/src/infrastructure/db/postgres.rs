use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use crate::domain::common::entities::app_errors::CoreError;
use crate::infrastructure::db::{connect, migration::Migrator};

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and brings the schema up to date.
    pub async fn new(config: PostgresConfig) -> Result<Self, CoreError> {
        let db = connect(&config.database_url).await.map_err(|e| {
            error!("Failed to connect to database: {}", e);
            CoreError::InternalServerError
        })?;

        Migrator::up(&db, None).await.map_err(|e| {
            error!("Failed to run migrations: {}", e);
            CoreError::InternalServerError
        })?;
        info!("database schema is up to date");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
