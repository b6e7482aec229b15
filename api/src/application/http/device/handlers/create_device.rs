use assetdesk_core::domain::device::{Device, DeviceService};
use axum::extract::State;

use crate::application::http::{
    device::validators::CreateDeviceValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "device",
    summary = "Create device",
    description = "Stores a device and attaches a QR code pointing at its public page.",
    request_body = CreateDeviceValidator,
    responses(
        (status = 200, body = Device),
        (status = 400, description = "Missing fields or duplicate code"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_device(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateDeviceValidator>,
) -> Result<Response<Device>, ApiError> {
    let device = state.service.create_device(payload.into()).await?;

    Ok(Response::OK(device))
}
