use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{InventoryConfig, QrConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        device::PostgresDeviceRepository,
        health::PostgresHealthCheckRepository,
        qr::PngQrEncoder,
    },
};

pub type InventoryService =
    Service<PostgresDeviceRepository, PngQrEncoder, PostgresHealthCheckRepository>;

/// Connects to the configured database, runs migrations and wires the service.
pub async fn create_service(config: InventoryConfig) -> Result<InventoryService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    Ok(build_service(postgres.get_db(), config.qr))
}

pub fn build_service(db: DatabaseConnection, qr_config: QrConfig) -> InventoryService {
    Service::new(
        PostgresDeviceRepository::new(db.clone()),
        PngQrEncoder::new(qr_config.size),
        PostgresHealthCheckRepository::new(db),
        qr_config,
    )
}
