pub mod common;
pub mod device;
pub mod health;
pub mod qr;
