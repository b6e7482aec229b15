use crate::domain::{
    common::QrConfig, device::ports::DeviceRepository, health::ports::HealthCheckRepository,
    qr::ports::QrEncoder,
};

#[derive(Clone)]
pub struct Service<D, Q, HC>
where
    D: DeviceRepository,
    Q: QrEncoder,
    HC: HealthCheckRepository,
{
    pub(crate) device_repository: D,
    pub(crate) qr_encoder: Q,
    pub(crate) health_check_repository: HC,
    pub(crate) qr_config: QrConfig,
}

impl<D, Q, HC> Service<D, Q, HC>
where
    D: DeviceRepository,
    Q: QrEncoder,
    HC: HealthCheckRepository,
{
    pub fn new(
        device_repository: D,
        qr_encoder: Q,
        health_check_repository: HC,
        qr_config: QrConfig,
    ) -> Self {
        Self {
            device_repository,
            qr_encoder,
            health_check_repository,
            qr_config,
        }
    }

    pub fn qr_config(&self) -> &QrConfig {
        &self.qr_config
    }
}
