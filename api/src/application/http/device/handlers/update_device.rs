use assetdesk_core::domain::device::{Device, DeviceService};
use axum::extract::State;

use crate::application::http::{
    device::validators::UpdateDeviceValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiPath, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{device_id}",
    tag = "device",
    summary = "Update device",
    description = "Applies a partial update. The QR code is regenerated when the encoded identifier changes.",
    params(
        ("device_id" = i32, Path, description = "Device id"),
    ),
    request_body = UpdateDeviceValidator,
    responses(
        (status = 200, body = Device),
        (status = 400, description = "Duplicate code or invalid fields"),
        (status = 404, description = "Device not found")
    )
)]
pub async fn update_device(
    ApiPath(device_id): ApiPath<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateDeviceValidator>,
) -> Result<Response<Device>, ApiError> {
    let device = state
        .service
        .update_device(payload.into_input(device_id))
        .await?;

    Ok(Response::OK(device))
}
