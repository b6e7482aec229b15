use crate::{domain::device::entities::Device, entity::devices};

impl From<&devices::Model> for Device {
    fn from(model: &devices::Model) -> Self {
        Self {
            id: model.id,
            code: model.code.clone(),
            name: model.name.clone(),
            brand: model.brand.clone(),
            model: model.model_name.clone(),
            // Only values from the closed sets are ever written.
            device_type: model.device_type.as_deref().and_then(|t| t.parse().ok()),
            location: model.location.as_deref().and_then(|l| l.parse().ok()),
            price: model.price,
            details: model.details.clone(),
            ip_address: model.ip_address.clone(),
            qr_code: model.qr_code.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<devices::Model> for Device {
    fn from(model: devices::Model) -> Self {
        Self::from(&model)
    }
}
