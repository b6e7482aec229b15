pub mod view_device;
