pub mod db;
pub mod device;
pub mod health;
pub mod qr;
