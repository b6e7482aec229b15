use assetdesk_core::domain::{common::entities::app_errors::CoreError, device::DeviceService};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::application::http::{
    public::render::{device_page, not_found_page},
    server::app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/device/{identifier}",
    tag = "public",
    summary = "Public device page",
    description = "HTML page targeted by device QR codes. The identifier is a code or an id depending on the deployment.",
    params(
        ("identifier" = String, Path, description = "Device code or id"),
    ),
    responses(
        (status = 200, description = "Device page", content_type = "text/html"),
        (status = 404, description = "Device not found", content_type = "text/html")
    )
)]
pub async fn view_device(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.service.get_public_device(identifier.clone()).await {
        Ok(device) => Html(device_page(&device)).into_response(),
        Err(CoreError::NotFound) => {
            (StatusCode::NOT_FOUND, Html(not_found_page(&identifier))).into_response()
        }
        Err(e) => {
            error!("Failed to load public device page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>เกิดข้อผิดพลาดในเซิร์ฟเวอร์</h1>".to_string()),
            )
                .into_response()
        }
    }
}
