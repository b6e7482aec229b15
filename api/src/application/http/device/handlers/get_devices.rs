use assetdesk_core::domain::device::{Device, DeviceService};
use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "device",
    summary = "List devices",
    description = "Returns every device, newest first.",
    responses(
        (status = 200, body = Vec<Device>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_devices(State(state): State<AppState>) -> Result<Response<Vec<Device>>, ApiError> {
    let devices = state.service.get_devices().await?;

    Ok(Response::OK(devices))
}
