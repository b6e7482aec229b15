pub mod device;
pub mod health;
pub mod public;
pub mod server;
