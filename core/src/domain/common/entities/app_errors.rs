use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Device not found")]
    NotFound,

    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Price must not be negative")]
    InvalidPrice,

    #[error("Device code '{0}' is already in use")]
    DuplicateCode(String),

    #[error("QR code generation failed: {0}")]
    QrEncoding(String),

    #[error("Internal server error")]
    InternalServerError,
}
