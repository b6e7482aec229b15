use super::handlers::view_device::view_device;
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};

pub fn public_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/device/{{identifier}}", state.args.server.root_path),
        get(view_device),
    )
}
