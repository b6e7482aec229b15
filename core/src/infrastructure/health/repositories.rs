use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        let start = Instant::now();
        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(start.elapsed().as_millis() as u64)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let response_time_ms = self.health().await?;

        Ok(DatabaseHealthStatus {
            status: "UP".to_string(),
            backend: format!("{:?}", self.db.get_database_backend()),
            response_time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::testing::memory_db;

    #[tokio::test]
    async fn test_readness_reports_backend() {
        let repository = PostgresHealthCheckRepository::new(memory_db().await);

        let status = repository.readness().await.unwrap();

        assert_eq!(status.status, "UP");
        assert_eq!(status.backend, "Sqlite");
    }
}
