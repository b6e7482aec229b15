use tracing::{error, instrument, warn};

use crate::domain::{
    common::{IdentityStrategy, entities::app_errors::CoreError, services::Service},
    device::{
        entities::Device,
        ports::{DeviceRepository, DeviceService},
        value_objects::{CreateDeviceInput, UpdateDeviceInput},
    },
    health::ports::HealthCheckRepository,
    qr::{ports::QrEncoder, value_objects::public_device_url},
};

impl<D, Q, HC> Service<D, Q, HC>
where
    D: DeviceRepository,
    Q: QrEncoder,
    HC: HealthCheckRepository,
{
    fn qr_data_url(&self, device: &Device) -> Result<String, CoreError> {
        let url = public_device_url(
            &self.qr_config.public_base_url,
            &device.identifier(self.qr_config.identity),
        );
        let image = self.qr_encoder.encode(&url)?;

        Ok(image.to_data_url())
    }

    async fn attach_qr(&self, mut device: Device) -> Result<Device, CoreError> {
        device.qr_code = Some(self.qr_data_url(&device)?);
        self.device_repository.update(device).await
    }
}

impl<D, Q, HC> DeviceService for Service<D, Q, HC>
where
    D: DeviceRepository,
    Q: QrEncoder,
    HC: HealthCheckRepository,
{
    async fn get_devices(&self) -> Result<Vec<Device>, CoreError> {
        self.device_repository.list().await
    }

    async fn get_device(&self, device_id: i32) -> Result<Device, CoreError> {
        self.device_repository
            .get_by_id(device_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_device_by_code(&self, code: String) -> Result<Device, CoreError> {
        self.device_repository
            .get_by_code(code)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_public_device(&self, identifier: String) -> Result<Device, CoreError> {
        match self.qr_config.identity {
            IdentityStrategy::Code => self.get_device_by_code(identifier).await,
            IdentityStrategy::Id => {
                let device_id = identifier
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| CoreError::NotFound)?;
                self.get_device(device_id).await
            }
        }
    }

    #[instrument(skip(self, input), fields(code = ?input.code))]
    async fn create_device(&self, input: CreateDeviceInput) -> Result<Device, CoreError> {
        let missing = input.missing_fields(self.qr_config.identity);
        if !missing.is_empty() {
            return Err(CoreError::Validation(missing));
        }
        if input.price.is_some_and(|price| price < 0.0) {
            return Err(CoreError::InvalidPrice);
        }

        // The row goes in first: under the id strategy the QR target needs the assigned id.
        let created = self
            .device_repository
            .create(input.into_new_device())
            .await?;
        let device_id = created.id;

        match self.attach_qr(created).await {
            Ok(device) => Ok(device),
            Err(e) => {
                warn!(device_id, "removing device after QR attachment failed: {}", e);
                if let Err(cleanup) = self.device_repository.delete(device_id).await {
                    error!(device_id, "failed to remove device without QR code: {}", cleanup);
                }
                Err(e)
            }
        }
    }

    #[instrument(skip(self, input), fields(device_id = input.device_id))]
    async fn update_device(&self, input: UpdateDeviceInput) -> Result<Device, CoreError> {
        let strategy = self.qr_config.identity;

        let mut device = self
            .device_repository
            .get_by_id(input.device_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if input.price.flatten().is_some_and(|price| price < 0.0) {
            return Err(CoreError::InvalidPrice);
        }

        if let Some(code) = input.code.as_deref().map(str::trim)
            && !code.is_empty()
            && let Some(owner) = self.device_repository.get_by_code(code.to_string()).await?
            && owner.id != device.id
        {
            return Err(CoreError::DuplicateCode(code.to_string()));
        }

        let previous_identifier = device.identifier(strategy);
        device.update(input);

        let missing = device.missing_fields(strategy);
        if !missing.is_empty() {
            return Err(CoreError::Validation(missing));
        }

        if device.qr_code.is_none() || device.identifier(strategy) != previous_identifier {
            device.qr_code = Some(self.qr_data_url(&device)?);
        }

        self.device_repository.update(device).await
    }

    #[instrument(skip(self))]
    async fn regenerate_qr(&self, device_id: i32) -> Result<Device, CoreError> {
        let mut device = self
            .device_repository
            .get_by_id(device_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        device.updated_at = chrono::Utc::now();

        self.attach_qr(device).await
    }

    #[instrument(skip(self))]
    async fn delete_device(&self, device_id: i32) -> Result<(), CoreError> {
        self.device_repository.delete(device_id).await
    }
}
