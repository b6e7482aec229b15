use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

pub mod migration;
pub mod postgres;

/// Opens a connection pool. In-memory SQLite URLs are pinned to a single connection,
/// since every new connection would see its own empty database.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}

#[cfg(test)]
pub mod testing {
    use sea_orm::DatabaseConnection;
    use sea_orm_migration::MigratorTrait;

    use super::{connect, migration::Migrator};

    pub async fn memory_db() -> DatabaseConnection {
        let db = connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }
}
