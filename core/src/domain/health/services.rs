use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    device::ports::DeviceRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    qr::ports::QrEncoder,
};

impl<D, Q, HC> HealthCheckService for Service<D, Q, HC>
where
    D: DeviceRepository,
    Q: QrEncoder,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
