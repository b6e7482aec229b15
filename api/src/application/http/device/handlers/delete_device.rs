use assetdesk_core::domain::device::DeviceService;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiPath},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteDeviceResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{device_id}",
    tag = "device",
    summary = "Delete device",
    params(
        ("device_id" = i32, Path, description = "Device id"),
    ),
    responses(
        (status = 200, body = DeleteDeviceResponse),
        (status = 404, description = "Device not found")
    )
)]
pub async fn delete_device(
    ApiPath(device_id): ApiPath<i32>,
    State(state): State<AppState>,
) -> Result<Response<DeleteDeviceResponse>, ApiError> {
    state.service.delete_device(device_id).await?;

    Ok(Response::OK(DeleteDeviceResponse {
        message: "ลบข้อมูลอุปกรณ์เรียบร้อยแล้ว".to_string(),
    }))
}
