use assetdesk_core::domain::common::entities::app_errors::CoreError;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use validator::Validate;

pub const MSG_NOT_FOUND: &str = "ไม่พบอุปกรณ์";
pub const MSG_MISSING_FIELDS: &str = "กรุณาระบุข้อมูลให้ครบถ้วน";
pub const MSG_DUPLICATE_CODE: &str = "รหัสอุปกรณ์ซ้ำ ไม่สามารถบันทึกได้";
pub const MSG_INVALID_PRICE: &str = "ราคาต้องไม่ติดลบ";
pub const MSG_QR_FAILED: &str = "ไม่สามารถสร้าง QR Code ได้";
pub const MSG_SERVER_ERROR: &str = "เกิดข้อผิดพลาดในเซิร์ฟเวอร์";
pub const MSG_EMPTY_BODY: &str = "ไม่มีข้อมูลในคำขอ";
pub const MSG_INVALID_PATH: &str = "รหัสอุปกรณ์ไม่ถูกต้อง";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound(MSG_NOT_FOUND.to_string()),
            CoreError::Validation(fields) => {
                ApiError::BadRequest(format!("{}: {}", MSG_MISSING_FIELDS, fields.join(", ")))
            }
            CoreError::InvalidPrice => ApiError::BadRequest(MSG_INVALID_PRICE.to_string()),
            CoreError::DuplicateCode(_) => ApiError::BadRequest(MSG_DUPLICATE_CODE.to_string()),
            CoreError::QrEncoding(_) => ApiError::InternalServerError(MSG_QR_FAILED.to_string()),
            CoreError::InternalServerError => {
                ApiError::InternalServerError(MSG_SERVER_ERROR.to_string())
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(e) => {
                ApiError::BadRequest(format!("{}: {}", MSG_INVALID_PATH, e.body_text()))
            }
            other => {
                error!("Failed to extract path parameters: {}", other.body_text());
                ApiError::InternalServerError(MSG_SERVER_ERROR.to_string())
            }
        }
    }
}

/// `Path` extractor whose rejection is rendered as an [`ApiError`] body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ApiPath(value))
    }
}

/// `Json` extractor that also runs the payload's `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::BadRequest(MSG_EMPTY_BODY.to_string())
                }
                other => {
                    error!("Failed to parse request body: {}", other.body_text());
                    ApiError::BadRequest(other.body_text())
                }
            })?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_status_mapping() {
        assert_eq!(
            ApiError::from(CoreError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CoreError::DuplicateCode("PC-001".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(CoreError::QrEncoding("too long".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let error = ApiError::from(CoreError::Validation(vec![
            "brand".to_string(),
            "model".to_string(),
        ]));

        assert_eq!(
            error,
            ApiError::BadRequest("กรุณาระบุข้อมูลให้ครบถ้วน: brand, model".to_string())
        );
    }
}
