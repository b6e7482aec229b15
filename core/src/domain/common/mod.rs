use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct InventoryConfig {
    pub database: DatabaseConfig,
    pub qr: QrConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct QrConfig {
    /// Origin of the public detail pages, without trailing slash.
    pub public_base_url: String,
    pub identity: IdentityStrategy,
    /// Minimum width and height of the rendered image, in pixels.
    pub size: u32,
}

impl QrConfig {
    pub fn new(public_base_url: impl Into<String>, identity: IdentityStrategy) -> Self {
        Self {
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            identity,
            size: 240,
        }
    }
}

/// Which device attribute is encoded into QR targets and used by the public page lookup.
///
/// A deployment picks exactly one. Switching after labels have been printed breaks the
/// links already encoded in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IdentityStrategy {
    #[default]
    Code,
    Id,
}

impl IdentityStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityStrategy::Code => "code",
            IdentityStrategy::Id => "id",
        }
    }
}

impl fmt::Display for IdentityStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" => Ok(IdentityStrategy::Code),
            "id" => Ok(IdentityStrategy::Id),
            other => Err(format!(
                "unknown identity strategy '{other}', expected 'code' or 'id'"
            )),
        }
    }
}
