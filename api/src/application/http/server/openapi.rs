use crate::application::http::{
    device::router::DeviceApiDoc,
    health::{__path_health_live, __path_health_ready},
    public::handlers::view_device::__path_view_device,
    server::config::__path_get_config,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AssetDesk API",
        description = "Device inventory with QR labels and public device pages"
    ),
    paths(get_config, health_live, health_ready, view_device),
    nest(
        (path = "/api/devices", api = DeviceApiDoc),
    )
)]
pub struct ApiDoc;
