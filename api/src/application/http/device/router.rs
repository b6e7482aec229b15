use super::handlers::{
    create_device::{__path_create_device, create_device},
    delete_device::{__path_delete_device, delete_device},
    get_device::{__path_get_device, get_device},
    get_device_by_code::{__path_get_device_by_code, get_device_by_code},
    get_devices::{__path_get_devices, get_devices},
    regenerate_qr::{__path_regenerate_qr, regenerate_qr},
    update_device::{__path_update_device, update_device},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_devices,
    get_device,
    get_device_by_code,
    create_device,
    update_device,
    delete_device,
    regenerate_qr
))]
pub struct DeviceApiDoc;

pub fn device_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/devices", state.args.server.root_path),
            get(get_devices).post(create_device),
        )
        .route(
            &format!("{}/api/devices/{{device_id}}", state.args.server.root_path),
            get(get_device).put(update_device).delete(delete_device),
        )
        .route(
            &format!("{}/api/devices/code/{{code}}", state.args.server.root_path),
            get(get_device_by_code),
        )
        .route(
            &format!(
                "{}/api/devices/{{device_id}}/qrcode",
                state.args.server.root_path
            ),
            post(regenerate_qr),
        )
}
