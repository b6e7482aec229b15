use assetdesk_core::domain::device::{Device, DeviceService};
use axum::extract::State;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiPath},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{device_id}",
    tag = "device",
    summary = "Get device",
    params(
        ("device_id" = i32, Path, description = "Device id"),
    ),
    responses(
        (status = 200, body = Device),
        (status = 404, description = "Device not found")
    )
)]
pub async fn get_device(
    ApiPath(device_id): ApiPath<i32>,
    State(state): State<AppState>,
) -> Result<Response<Device>, ApiError> {
    let device = state.service.get_device(device_id).await?;

    Ok(Response::OK(device))
}
