use assetdesk_core::domain::device::{
    DeviceType, Location,
    value_objects::{CreateDeviceInput, UpdateDeviceInput},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Keeps an explicit `null` apart from an absent key: absent stays `None` through
/// `#[serde(default)]`, `null` becomes `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Request body for device creation. Which text fields are mandatory depends on the
/// deployment's identity strategy, so presence is checked by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceValidator {
    #[serde(default, alias = "customCode")]
    #[validate(length(max = 64, message = "code must be at most 64 characters"))]
    pub code: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default, rename = "type")]
    pub device_type: Option<DeviceType>,

    #[serde(default)]
    pub location: Option<Location>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,

    #[serde(default)]
    pub details: Option<String>,

    #[serde(default)]
    pub ip_address: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CreateDeviceValidator> for CreateDeviceInput {
    fn from(payload: CreateDeviceValidator) -> Self {
        CreateDeviceInput {
            code: payload.code,
            name: payload.name,
            brand: payload.brand,
            model: payload.model,
            device_type: payload.device_type,
            location: payload.location,
            price: payload.price,
            details: payload.details,
            ip_address: payload.ip_address,
            created_at: payload.created_at,
        }
    }
}

/// Request body for a partial update. An omitted key leaves the field as it is; `null`
/// clears `type`, `location` or `price`, and an empty string clears an optional text field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_price"))]
pub struct UpdateDeviceValidator {
    #[serde(default, alias = "customCode")]
    #[validate(length(min = 1, max = 64, message = "code must be 1 to 64 characters"))]
    pub code: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "brand is required"))]
    pub brand: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "model is required"))]
    pub model: Option<String>,

    #[serde(default, rename = "type", deserialize_with = "double_option")]
    #[schema(value_type = Option<DeviceType>)]
    pub device_type: Option<Option<DeviceType>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Location>)]
    pub location: Option<Option<Location>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<f64>, minimum = 0.0)]
    pub price: Option<Option<f64>>,

    #[serde(default)]
    pub details: Option<String>,

    #[serde(default)]
    pub ip_address: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn validate_update_price(payload: &UpdateDeviceValidator) -> Result<(), ValidationError> {
    match payload.price {
        Some(Some(price)) if price < 0.0 => Err(ValidationError::new("price")
            .with_message("price must not be negative".into())),
        _ => Ok(()),
    }
}

impl UpdateDeviceValidator {
    pub fn into_input(self, device_id: i32) -> UpdateDeviceInput {
        UpdateDeviceInput {
            device_id,
            code: self.code,
            name: self.name,
            brand: self.brand,
            model: self.model,
            device_type: self.device_type,
            location: self.location,
            price: self.price,
            details: self.details,
            ip_address: self.ip_address,
            created_at: self.created_at,
        }
    }
}
