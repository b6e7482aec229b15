use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::IdentityStrategy,
    device::value_objects::{UpdateDeviceInput, trimmed},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i32,
    pub code: String,
    pub name: Option<String>,
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub device_type: Option<DeviceType>,
    pub location: Option<Location>,
    pub price: Option<f64>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    /// `data:image/png;base64,` payload pointing at the public page.
    pub qr_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Device {
    /// The value encoded into this device's QR target under `strategy`.
    pub fn identifier(&self, strategy: IdentityStrategy) -> String {
        match strategy {
            IdentityStrategy::Code => self.code.clone(),
            IdentityStrategy::Id => self.id.to_string(),
        }
    }

    /// Applies a partial update. Required text fields take the new value as given so that
    /// blanking one is caught by [`Device::missing_fields`].
    pub fn update(&mut self, input: UpdateDeviceInput) {
        if let Some(code) = input.code {
            self.code = code.trim().to_string();
        }
        if let Some(name) = input.name {
            self.name = trimmed(Some(name));
        }
        if let Some(brand) = input.brand {
            self.brand = brand.trim().to_string();
        }
        if let Some(model) = input.model {
            self.model = model.trim().to_string();
        }
        if let Some(device_type) = input.device_type {
            self.device_type = device_type;
        }
        if let Some(location) = input.location {
            self.location = location;
        }
        if let Some(price) = input.price {
            self.price = price;
        }
        if let Some(details) = input.details {
            self.details = trimmed(Some(details));
        }
        if let Some(ip_address) = input.ip_address {
            self.ip_address = trimmed(Some(ip_address));
        }
        if let Some(created_at) = input.created_at {
            self.created_at = created_at;
        }
        self.updated_at = Utc::now();
    }

    /// Mandatory fields left blank on this record, in form order.
    pub fn missing_fields(&self, strategy: IdentityStrategy) -> Vec<String> {
        required_fields(
            strategy,
            RequiredFields {
                name: self.name.as_deref(),
                code: Some(self.code.as_str()),
                brand: Some(self.brand.as_str()),
                model: Some(self.model.as_str()),
                has_type: self.device_type.is_some(),
                has_location: self.location.is_some(),
            },
        )
    }
}

pub(crate) struct RequiredFields<'a> {
    pub name: Option<&'a str>,
    pub code: Option<&'a str>,
    pub brand: Option<&'a str>,
    pub model: Option<&'a str>,
    pub has_type: bool,
    pub has_location: bool,
}

pub(crate) fn required_fields(strategy: IdentityStrategy, fields: RequiredFields<'_>) -> Vec<String> {
    let blank = |value: Option<&str>| value.is_none_or(|v| v.trim().is_empty());
    let mut missing = Vec::new();

    if strategy == IdentityStrategy::Code && blank(fields.name) {
        missing.push("name".to_string());
    }
    if blank(fields.code) {
        missing.push("code".to_string());
    }
    if blank(fields.brand) {
        missing.push("brand".to_string());
    }
    if blank(fields.model) {
        missing.push("model".to_string());
    }
    if strategy == IdentityStrategy::Id {
        if !fields.has_type {
            missing.push("type".to_string());
        }
        if !fields.has_location {
            missing.push("location".to_string());
        }
    }

    missing
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DeviceType {
    #[serde(rename = "คอมพิวเตอร์")]
    Computer,
    #[serde(rename = "โน้ตบุ๊ก")]
    Notebook,
    #[serde(rename = "ปริ้นเตอร์")]
    Printer,
    #[serde(rename = "UPS")]
    Ups,
    #[serde(rename = "อุปกรณ์เครือข่าย")]
    NetworkDevice,
    #[serde(rename = "โทรศัพท์")]
    Phone,
    #[serde(rename = "อื่นๆ")]
    Other,
}

impl DeviceType {
    pub const ALL: [DeviceType; 7] = [
        DeviceType::Computer,
        DeviceType::Notebook,
        DeviceType::Printer,
        DeviceType::Ups,
        DeviceType::NetworkDevice,
        DeviceType::Phone,
        DeviceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Computer => "คอมพิวเตอร์",
            DeviceType::Notebook => "โน้ตบุ๊ก",
            DeviceType::Printer => "ปริ้นเตอร์",
            DeviceType::Ups => "UPS",
            DeviceType::NetworkDevice => "อุปกรณ์เครือข่าย",
            DeviceType::Phone => "โทรศัพท์",
            DeviceType::Other => "อื่นๆ",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("unknown device type '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Location {
    #[serde(rename = "พัสดุ")]
    Supplies,
    #[serde(rename = "ห้องไอที")]
    ItRoom,
    #[serde(rename = "การเงิน")]
    Finance,
    #[serde(rename = "ทะเบียน")]
    Registry,
    #[serde(rename = "ห้องยา")]
    Pharmacy,
    #[serde(rename = "OPD")]
    Opd,
    #[serde(rename = "IPD")]
    Ipd,
    #[serde(rename = "ER")]
    Er,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::Supplies,
        Location::ItRoom,
        Location::Finance,
        Location::Registry,
        Location::Pharmacy,
        Location::Opd,
        Location::Ipd,
        Location::Er,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Supplies => "พัสดุ",
            Location::ItRoom => "ห้องไอที",
            Location::Finance => "การเงิน",
            Location::Registry => "ทะเบียน",
            Location::Pharmacy => "ห้องยา",
            Location::Opd => "OPD",
            Location::Ipd => "IPD",
            Location::Er => "ER",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|l| l.as_str() == s.trim())
            .ok_or_else(|| format!("unknown location '{s}'"))
    }
}
