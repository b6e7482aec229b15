use assetdesk_core::domain::{
    common::IdentityStrategy,
    device::{DeviceType, Location},
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

/// Settings the admin client needs to build links and dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub public_base_url: String,
    pub identity: IdentityStrategy,
    pub device_types: Vec<DeviceType>,
    pub locations: Vec<Location>,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Public client configuration",
    responses(
        (status = 200, body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Result<Response<ConfigResponse>, ApiError> {
    let qr = state.service.qr_config();

    Ok(Response::OK(ConfigResponse {
        public_base_url: qr.public_base_url.clone(),
        identity: qr.identity,
        device_types: DeviceType::ALL.to_vec(),
        locations: Location::ALL.to_vec(),
    }))
}
