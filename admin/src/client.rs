use assetdesk_core::domain::{
    common::IdentityStrategy,
    device::{Device, DeviceType, Location},
};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, error};

use crate::form::DevicePayload;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("ไม่สามารถเชื่อมต่อเซิร์ฟเวอร์ได้: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("invalid api url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Errors the user can fix in the form (bad input, unknown device). Everything else
    /// is shown as a page-level banner.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            ClientError::Api { status, .. }
                if *status == StatusCode::BAD_REQUEST || *status == StatusCode::NOT_FOUND
        )
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            ClientError::InvalidUrl(_) => None,
        }
    }
}

/// Builds the error for a non-success response. Accepts both the `{message}` body and the
/// older `{error}` body.
pub fn api_error(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value["message"]
                .as_str()
                .or_else(|| value["error"].as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string()
        });

    ClientError::Api { status, message }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub public_base_url: String,
    pub identity: IdentityStrategy,
    pub device_types: Vec<DeviceType>,
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegeneratedQr {
    pub message: String,
    pub qr_code: Option<String>,
    pub device: Device,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("API returned {}: {}", status, body);
            return Err(api_error(status, &body));
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn config(&self) -> Result<ServerConfig, ClientError> {
        let response = self.client.get(self.url("/config")).send().await?;
        Self::handle(response).await
    }

    pub async fn list_devices(&self) -> Result<Vec<Device>, ClientError> {
        debug!("fetching device list");
        let response = self.client.get(self.url("/api/devices")).send().await?;
        Self::handle(response).await
    }

    pub async fn get_device(&self, device_id: i32) -> Result<Device, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/devices/{}", device_id)))
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn get_device_by_code(&self, code: &str) -> Result<Device, ClientError> {
        let mut url = reqwest::Url::parse(&self.url("/api/devices/code"))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .push(code);

        let response = self.client.get(url).send().await?;
        Self::handle(response).await
    }

    pub async fn create_device(&self, payload: &DevicePayload) -> Result<Device, ClientError> {
        let response = self
            .client
            .post(self.url("/api/devices"))
            .json(payload)
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn update_device(
        &self,
        device_id: i32,
        payload: &DevicePayload,
    ) -> Result<Device, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/api/devices/{}", device_id)))
            .json(payload)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// Returns the server's confirmation message.
    pub async fn delete_device(&self, device_id: i32) -> Result<String, ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/devices/{}", device_id)))
            .send()
            .await?;
        Self::handle::<MessageResponse>(response)
            .await
            .map(|body| body.message)
    }

    pub async fn regenerate_qr(&self, device_id: i32) -> Result<RegeneratedQr, ClientError> {
        let response = self
            .client
            .post(self.url(&format!("/api/devices/{}/qrcode", device_id)))
            .send()
            .await?;
        Self::handle(response).await
    }
}
