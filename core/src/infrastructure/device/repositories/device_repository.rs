use chrono::Utc;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    device::{entities::Device, ports::DeviceRepository, value_objects::NewDevice},
};
use crate::entity::devices::{
    ActiveModel as DeviceActiveModel, Column as DeviceColumn, Entity as DeviceEntity,
};

/// sea-orm backed device store. Production runs it on Postgres; nothing in it is
/// Postgres-specific, so tests run it on SQLite.
#[derive(Debug, Clone)]
pub struct PostgresDeviceRepository {
    pub db: DatabaseConnection,
}

impl PostgresDeviceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Maps a write failure, turning a unique-index hit on `code` into a domain error.
fn write_error(operation: &str, code: &str, e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        error!("Duplicate device code on {}: {}", operation, detail);
        return CoreError::DuplicateCode(code.to_string());
    }
    if matches!(e, DbErr::RecordNotUpdated) {
        return CoreError::NotFound;
    }

    error!("Failed to {} device: {}", operation, e);
    CoreError::InternalServerError
}

impl DeviceRepository for PostgresDeviceRepository {
    async fn list(&self) -> Result<Vec<Device>, CoreError> {
        let devices = DeviceEntity::find()
            .order_by_desc(DeviceColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch devices: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Device::from)
            .collect::<Vec<Device>>();

        Ok(devices)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Device>, CoreError> {
        let device = DeviceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get device by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Device::from);

        Ok(device)
    }

    async fn get_by_code(&self, code: String) -> Result<Option<Device>, CoreError> {
        let device = DeviceEntity::find()
            .filter(DeviceColumn::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get device by code: {}", e);
                CoreError::InternalServerError
            })?
            .map(Device::from);

        Ok(device)
    }

    async fn create(&self, device: NewDevice) -> Result<Device, CoreError> {
        let now = Utc::now();
        let code = device.code.clone();

        let created = DeviceEntity::insert(DeviceActiveModel {
            id: NotSet,
            code: Set(device.code),
            name: Set(device.name),
            brand: Set(device.brand),
            model_name: Set(device.model),
            device_type: Set(device.device_type.map(|t| t.as_str().to_string())),
            location: Set(device.location.map(|l| l.as_str().to_string())),
            price: Set(device.price),
            details: Set(device.details),
            ip_address: Set(device.ip_address),
            qr_code: Set(None),
            created_at: Set(device.created_at.unwrap_or(now).fixed_offset()),
            updated_at: Set(now.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Device::from)
        .map_err(|e| write_error("create", &code, e))?;

        Ok(created)
    }

    async fn update(&self, device: Device) -> Result<Device, CoreError> {
        let code = device.code.clone();

        let updated = DeviceEntity::update(DeviceActiveModel {
            id: Set(device.id),
            code: Set(device.code),
            name: Set(device.name),
            brand: Set(device.brand),
            model_name: Set(device.model),
            device_type: Set(device.device_type.map(|t| t.as_str().to_string())),
            location: Set(device.location.map(|l| l.as_str().to_string())),
            price: Set(device.price),
            details: Set(device.details),
            ip_address: Set(device.ip_address),
            qr_code: Set(device.qr_code),
            created_at: Set(device.created_at.fixed_offset()),
            updated_at: Set(device.updated_at.fixed_offset()),
        })
        .exec(&self.db)
        .await
        .map(Device::from)
        .map_err(|e| write_error("update", &code, e))?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), CoreError> {
        let result = DeviceEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete device: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::device::entities::{DeviceType, Location},
        infrastructure::db::testing::memory_db,
    };

    fn new_device(code: &str) -> NewDevice {
        NewDevice {
            code: code.to_string(),
            name: None,
            brand: "APC".to_string(),
            model: "Back-UPS 650".to_string(),
            device_type: Some(DeviceType::Ups),
            location: Some(Location::ItRoom),
            price: Some(2490.0),
            details: Some("rack 2".to_string()),
            ip_address: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_list_orders_by_id_desc() {
        let repository = PostgresDeviceRepository::new(memory_db().await);
        let first = repository.create(new_device("UPS-1")).await.unwrap();
        let second = repository.create(new_device("UPS-2")).await.unwrap();

        let ids: Vec<i32> = repository.list().await.unwrap().iter().map(|d| d.id).collect();

        assert_eq!(ids, vec![second.id, first.id]);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_create_keeps_closed_set_values() {
        let repository = PostgresDeviceRepository::new(memory_db().await);

        let created = repository.create(new_device("UPS-1")).await.unwrap();
        let fetched = repository.get_by_code("UPS-1".to_string()).await.unwrap().unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.device_type, Some(DeviceType::Ups));
        assert_eq!(fetched.location, Some(Location::ItRoom));
        assert_eq!(fetched.qr_code, None);
    }

    #[tokio::test]
    async fn test_create_honours_given_created_at() {
        let repository = PostgresDeviceRepository::new(memory_db().await);
        let purchased = "2023-04-01T08:30:00Z".parse::<chrono::DateTime<Utc>>().unwrap();

        let mut device = new_device("UPS-1");
        device.created_at = Some(purchased);
        let created = repository.create(device).await.unwrap();

        assert_eq!(created.created_at, purchased);
    }

    #[tokio::test]
    async fn test_create_duplicate_code() {
        let repository = PostgresDeviceRepository::new(memory_db().await);
        repository.create(new_device("UPS-1")).await.unwrap();

        let result = repository.create(new_device("UPS-1")).await;

        assert_eq!(result, Err(CoreError::DuplicateCode("UPS-1".to_string())));
    }

    #[tokio::test]
    async fn test_update_into_taken_code() {
        let repository = PostgresDeviceRepository::new(memory_db().await);
        repository.create(new_device("UPS-1")).await.unwrap();
        let mut other = repository.create(new_device("UPS-2")).await.unwrap();

        other.code = "UPS-1".to_string();
        let result = repository.update(other).await;

        assert_eq!(result, Err(CoreError::DuplicateCode("UPS-1".to_string())));
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let repository = PostgresDeviceRepository::new(memory_db().await);
        let mut device = repository.create(new_device("UPS-1")).await.unwrap();
        repository.delete(device.id).await.unwrap();

        device.name = Some("gone".to_string());
        assert_eq!(repository.update(device).await, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_row() {
        let repository = PostgresDeviceRepository::new(memory_db().await);
        assert_eq!(repository.delete(1).await, Err(CoreError::NotFound));
        assert_eq!(repository.get_by_id(1).await, Ok(None));
    }
}
