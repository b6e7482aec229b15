use assetdesk_core::domain::{
    common::IdentityStrategy,
    device::{Device, DeviceType, Location, value_objects::CreateDeviceInput},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("กรุณากรอกข้อมูลให้ครบทุกช่องที่จำเป็น: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("ราคาไม่ถูกต้อง: {0}")]
    InvalidPrice(String),
}

/// JSON body sent to the create and update endpoints. A key set to `Some(None)` goes out
/// as `null`, which clears the field on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<Option<DeviceType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<Location>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/edit form. Text inputs are kept as typed; `price` stays a string until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceForm {
    pub code: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub device_type: Option<DeviceType>,
    pub location: Option<Location>,
    pub price: String,
    pub details: String,
    pub ip_address: String,
    pub created_at: Option<DateTime<Utc>>,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl DeviceForm {
    pub fn from_device(device: &Device) -> Self {
        Self {
            code: device.code.clone(),
            name: device.name.clone().unwrap_or_default(),
            brand: device.brand.clone(),
            model: device.model.clone(),
            device_type: device.device_type,
            location: device.location,
            price: device.price.map(|p| p.to_string()).unwrap_or_default(),
            details: device.details.clone().unwrap_or_default(),
            ip_address: device.ip_address.clone().unwrap_or_default(),
            created_at: Some(device.created_at),
        }
    }

    fn parse_price(&self) -> Result<Option<f64>, FormError> {
        let Some(raw) = non_empty(&self.price) else {
            return Ok(None);
        };
        match raw.replace(',', "").parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
            _ => Err(FormError::InvalidPrice(raw)),
        }
    }

    /// Runs the same required-field rule as the server for the deployment's strategy.
    pub fn validate(&self, strategy: IdentityStrategy) -> Result<(), FormError> {
        let missing = CreateDeviceInput {
            code: non_empty(&self.code),
            name: non_empty(&self.name),
            brand: non_empty(&self.brand),
            model: non_empty(&self.model),
            device_type: self.device_type,
            location: self.location,
            ..Default::default()
        }
        .missing_fields(strategy);

        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        self.parse_price().map(|_| ())
    }

    /// Body for a new device; blank optional inputs are left out.
    pub fn create_payload(&self, strategy: IdentityStrategy) -> Result<DevicePayload, FormError> {
        self.validate(strategy)?;

        Ok(DevicePayload {
            code: non_empty(&self.code),
            name: non_empty(&self.name),
            brand: non_empty(&self.brand),
            model: non_empty(&self.model),
            device_type: self.device_type.map(Some),
            location: self.location.map(Some),
            price: self.parse_price()?.map(Some),
            details: non_empty(&self.details),
            ip_address: non_empty(&self.ip_address),
            created_at: self.created_at,
        })
    }

    /// Body for an edit. Optional inputs are always sent so that clearing one in the form
    /// clears it on the server: blank text as `""`, a blank price or unset type and
    /// location as `null`.
    pub fn update_payload(&self, strategy: IdentityStrategy) -> Result<DevicePayload, FormError> {
        self.validate(strategy)?;

        Ok(DevicePayload {
            code: non_empty(&self.code),
            name: Some(self.name.trim().to_string()),
            brand: non_empty(&self.brand),
            model: non_empty(&self.model),
            device_type: Some(self.device_type),
            location: Some(self.location),
            price: Some(self.parse_price()?),
            details: Some(self.details.trim().to_string()),
            ip_address: Some(self.ip_address.trim().to_string()),
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn filled() -> DeviceForm {
        DeviceForm {
            code: "PC-001".to_string(),
            name: "เครื่องงานการเงิน".to_string(),
            brand: "Dell".to_string(),
            model: "Vostro".to_string(),
            device_type: Some(DeviceType::Computer),
            location: Some(Location::Finance),
            price: "18,500".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_prefill_from_device() {
        let now = Utc::now();
        let device = Device {
            id: 3,
            code: "UPS-07".to_string(),
            name: None,
            brand: "APC".to_string(),
            model: "Back-UPS".to_string(),
            device_type: Some(DeviceType::Ups),
            location: Some(Location::Er),
            price: Some(3200.5),
            details: Some("ชั้น 1".to_string()),
            ip_address: None,
            qr_code: None,
            created_at: now,
            updated_at: now,
        };

        let form = DeviceForm::from_device(&device);

        assert_eq!(form.code, "UPS-07");
        assert_eq!(form.name, "");
        assert_eq!(form.price, "3200.5");
        assert_eq!(form.location, Some(Location::Er));
        assert_eq!(form.details, "ชั้น 1");
        assert_eq!(form.created_at, Some(now));
    }

    #[test]
    fn test_required_fields_follow_strategy() {
        let form = DeviceForm {
            name: String::new(),
            device_type: None,
            ..filled()
        };

        assert_eq!(
            form.validate(IdentityStrategy::Code),
            Err(FormError::MissingFields(vec!["name".to_string()]))
        );
        assert_eq!(
            form.validate(IdentityStrategy::Id),
            Err(FormError::MissingFields(vec!["type".to_string()]))
        );
    }

    #[test]
    fn test_invalid_price() {
        let form = DeviceForm {
            price: "-5".to_string(),
            ..filled()
        };
        assert_eq!(
            form.validate(IdentityStrategy::Code),
            Err(FormError::InvalidPrice("-5".to_string()))
        );

        let form = DeviceForm {
            price: "abc".to_string(),
            ..filled()
        };
        assert!(form.validate(IdentityStrategy::Code).is_err());
    }

    #[test]
    fn test_create_payload_omits_blank_optionals() {
        let payload = filled().create_payload(IdentityStrategy::Code).unwrap();

        assert_eq!(payload.price, Some(Some(18500.0)));
        assert_eq!(payload.details, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "คอมพิวเตอร์");
        assert_eq!(json["location"], "การเงิน");
        assert_eq!(json["price"], 18500.0);
        assert!(json.get("ipAddress").is_none());
        assert!(json.get("createdAt").is_none());

        let blank_price = DeviceForm {
            price: String::new(),
            ..filled()
        };
        let json = serde_json::to_value(blank_price.create_payload(IdentityStrategy::Code).unwrap())
            .unwrap();
        assert!(json.get("price").is_none());
    }

    #[test]
    fn test_update_payload_sends_cleared_optionals() {
        let payload = filled().update_payload(IdentityStrategy::Code).unwrap();

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["details"], "");
        assert_eq!(json["ipAddress"], "");
    }

    #[test]
    fn test_update_payload_sends_null_for_cleared_price_type_and_location() {
        let form = DeviceForm {
            price: String::new(),
            device_type: None,
            location: None,
            ..filled()
        };

        let json = serde_json::to_value(form.update_payload(IdentityStrategy::Code).unwrap())
            .unwrap();

        assert_eq!(json.get("price"), Some(&serde_json::Value::Null));
        assert_eq!(json.get("type"), Some(&serde_json::Value::Null));
        assert_eq!(json.get("location"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn test_payloads_carry_created_at() {
        let purchased = DateTime::parse_from_rfc3339("2024-03-01T08:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let form = DeviceForm {
            created_at: Some(purchased),
            ..filled()
        };

        let create = serde_json::to_value(form.create_payload(IdentityStrategy::Code).unwrap())
            .unwrap();
        let update = serde_json::to_value(form.update_payload(IdentityStrategy::Code).unwrap())
            .unwrap();

        assert_eq!(create["createdAt"], "2024-03-01T08:30:00Z");
        assert_eq!(update["createdAt"], "2024-03-01T08:30:00Z");
    }
}
