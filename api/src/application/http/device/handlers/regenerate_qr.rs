use assetdesk_core::domain::device::{Device, DeviceService};
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
#[serde(rename_all = "camelCase")]
pub struct RegenerateQrResponse {
    pub message: String,
    pub qr_code: Option<String>,
    pub device: Device,
}

#[utoipa::path(
    post,
    path = "/{device_id}/qrcode",
    tag = "device",
    summary = "Regenerate QR code",
    description = "Re-encodes the device's public URL with the current base URL and identifier.",
    params(
        ("device_id" = i32, Path, description = "Device id"),
    ),
    responses(
        (status = 200, body = RegenerateQrResponse),
        (status = 404, description = "Device not found"),
        (status = 500, description = "QR encoding failed")
    )
)]
pub async fn regenerate_qr(
    ApiPath(device_id): ApiPath<i32>,
    State(state): State<AppState>,
) -> Result<Response<RegenerateQrResponse>, ApiError> {
    let device = state.service.regenerate_qr(device_id).await?;

    Ok(Response::OK(RegenerateQrResponse {
        message: "สร้าง QR Code ใหม่เรียบร้อย".to_string(),
        qr_code: device.qr_code.clone(),
        device,
    }))
}
