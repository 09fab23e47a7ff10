//! Create contacts table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contacts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contacts::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Contacts::LastName).string_len(50).not_null())
                    .col(ColumnDef::new(Contacts::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(Contacts::Email).string().not_null())
                    .col(
                        ColumnDef::new(Contacts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Contacts::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Listing is ordered by last name, then first name
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_first_name")
                    .table(Contacts::Table)
                    .col(Contacts::FirstName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_last_name")
                    .table(Contacts::Table)
                    .col(Contacts::LastName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Contacts {
    Table,
    Id,
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    CreatedAt,
    UpdatedAt,
}
