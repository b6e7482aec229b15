pub mod device_repository;
