use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Devices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Devices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Devices::Code).string().not_null())
                    .col(ColumnDef::new(Devices::Name).string().null())
                    .col(ColumnDef::new(Devices::Brand).string().not_null())
                    .col(ColumnDef::new(Devices::Model).string().not_null())
                    .col(ColumnDef::new(Devices::DeviceType).string().null())
                    .col(ColumnDef::new(Devices::Location).string().null())
                    .col(ColumnDef::new(Devices::Price).double().null())
                    .col(ColumnDef::new(Devices::Details).text().null())
                    .col(ColumnDef::new(Devices::IpAddress).string().null())
                    .col(ColumnDef::new(Devices::QrCode).text().null())
                    .col(
                        ColumnDef::new(Devices::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Devices::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_devices_code_unique")
                    .table(Devices::Table)
                    .col(Devices::Code)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Devices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Devices {
    Table,
    Id,
    Code,
    Name,
    Brand,
    Model,
    DeviceType,
    Location,
    Price,
    Details,
    IpAddress,
    QrCode,
    CreatedAt,
    UpdatedAt,
}
