use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    device::{
        entities::Device,
        value_objects::{CreateDeviceInput, NewDevice, UpdateDeviceInput},
    },
};

pub trait DeviceService: Send + Sync {
    fn get_devices(&self) -> impl Future<Output = Result<Vec<Device>, CoreError>> + Send;

    fn get_device(&self, device_id: i32)
    -> impl Future<Output = Result<Device, CoreError>> + Send;

    fn get_device_by_code(
        &self,
        code: String,
    ) -> impl Future<Output = Result<Device, CoreError>> + Send;

    /// Looks a device up by whatever the configured identity strategy encodes in QR links.
    fn get_public_device(
        &self,
        identifier: String,
    ) -> impl Future<Output = Result<Device, CoreError>> + Send;

    fn create_device(
        &self,
        input: CreateDeviceInput,
    ) -> impl Future<Output = Result<Device, CoreError>> + Send;

    fn update_device(
        &self,
        input: UpdateDeviceInput,
    ) -> impl Future<Output = Result<Device, CoreError>> + Send;

    fn regenerate_qr(&self, device_id: i32)
    -> impl Future<Output = Result<Device, CoreError>> + Send;

    fn delete_device(&self, device_id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Persistence of device rows. Implementations report unique-code violations as
/// [`CoreError::DuplicateCode`] whatever the backing engine's error encoding is.
pub trait DeviceRepository: Send + Sync {
    /// All devices, highest id first.
    fn list(&self) -> impl Future<Output = Result<Vec<Device>, CoreError>> + Send;

    fn get_by_id(&self, id: i32) -> impl Future<Output = Result<Option<Device>, CoreError>> + Send;

    fn get_by_code(
        &self,
        code: String,
    ) -> impl Future<Output = Result<Option<Device>, CoreError>> + Send;

    fn create(&self, device: NewDevice) -> impl Future<Output = Result<Device, CoreError>> + Send;

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, CoreError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}
