pub mod client;
pub mod form;
pub mod label;
pub mod state;
