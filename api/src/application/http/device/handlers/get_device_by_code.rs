use assetdesk_core::domain::device::{Device, DeviceService};
use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/code/{code}",
    tag = "device",
    summary = "Get device by code",
    params(
        ("code" = String, Path, description = "Device code"),
    ),
    responses(
        (status = 200, body = Device),
        (status = 404, description = "Device not found")
    )
)]
pub async fn get_device_by_code(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Device>, ApiError> {
    let device = state.service.get_device_by_code(code).await?;

    Ok(Response::OK(device))
}
