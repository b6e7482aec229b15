pub mod create_device;
pub mod delete_device;
pub mod get_device;
pub mod get_device_by_code;
pub mod get_devices;
pub mod regenerate_qr;
pub mod update_device;
