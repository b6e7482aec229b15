use crate::domain::{common::entities::app_errors::CoreError, qr::value_objects::QrImage};

/// Turns a URL into a self-contained raster image. Deterministic for a given input.
#[cfg_attr(test, mockall::automock)]
pub trait QrEncoder: Send + Sync {
    fn encode(&self, url: &str) -> Result<QrImage, CoreError>;
}
