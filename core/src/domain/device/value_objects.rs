use chrono::{DateTime, Utc};

use crate::domain::{
    common::IdentityStrategy,
    device::entities::{DeviceType, Location, RequiredFields, required_fields},
};

/// Row handed to the store on insert; `id` and timestamps are assigned there.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDevice {
    pub code: String,
    pub name: Option<String>,
    pub brand: String,
    pub model: String,
    pub device_type: Option<DeviceType>,
    pub location: Option<Location>,
    pub price: Option<f64>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateDeviceInput {
    pub code: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub device_type: Option<DeviceType>,
    pub location: Option<Location>,
    pub price: Option<f64>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl CreateDeviceInput {
    pub fn missing_fields(&self, strategy: IdentityStrategy) -> Vec<String> {
        required_fields(
            strategy,
            RequiredFields {
                name: self.name.as_deref(),
                code: self.code.as_deref(),
                brand: self.brand.as_deref(),
                model: self.model.as_deref(),
                has_type: self.device_type.is_some(),
                has_location: self.location.is_some(),
            },
        )
    }

    /// Trims text fields and drops empty optional ones. Call after validation.
    pub fn into_new_device(self) -> NewDevice {
        NewDevice {
            code: trimmed(self.code).unwrap_or_default(),
            name: trimmed(self.name),
            brand: trimmed(self.brand).unwrap_or_default(),
            model: trimmed(self.model).unwrap_or_default(),
            device_type: self.device_type,
            location: self.location,
            price: self.price,
            details: trimmed(self.details),
            ip_address: trimmed(self.ip_address),
            created_at: self.created_at,
        }
    }
}

/// Partial update: `None` leaves a field untouched. An empty string clears an optional
/// text field; `Some(None)` clears `device_type`, `location` or `price`.
#[derive(Debug, Clone, Default)]
pub struct UpdateDeviceInput {
    pub device_id: i32,
    pub code: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub device_type: Option<Option<DeviceType>>,
    pub location: Option<Option<Location>>,
    pub price: Option<Option<f64>>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

pub(crate) fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_input_lists_every_missing_field() {
        let input = CreateDeviceInput {
            brand: Some("Dell".to_string()),
            ..Default::default()
        };

        assert_eq!(
            input.missing_fields(IdentityStrategy::Code),
            vec!["name", "code", "model"]
        );
        assert_eq!(
            input.missing_fields(IdentityStrategy::Id),
            vec!["code", "model", "type", "location"]
        );
    }

    #[test]
    fn test_into_new_device_trims_text() {
        let input = CreateDeviceInput {
            code: Some("  PC-001 ".to_string()),
            brand: Some("Dell".to_string()),
            model: Some("Latitude".to_string()),
            details: Some("   ".to_string()),
            ..Default::default()
        };

        let device = input.into_new_device();
        assert_eq!(device.code, "PC-001");
        assert_eq!(device.details, None);
    }
}
