//! Create `inquiry` table.
//!
//! Submissions from the public contact/quote forms. `product` is a free-text
//! label naming the item of interest, not a foreign key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inquiry::Table)
                    .if_not_exists()
                    .col(uuid(Inquiry::Id).primary_key())
                    .col(string_len(Inquiry::Name, 256).not_null())
                    .col(string_len(Inquiry::Email, 256).not_null())
                    .col(string_len(Inquiry::Phone, 64).not_null())
                    .col(string_len_null(Inquiry::Company, 256))
                    .col(text(Inquiry::Message).not_null())
                    .col(string_len(Inquiry::Source, 32).not_null())
                    .col(string_len_null(Inquiry::Product, 256))
                    .col(string_len(Inquiry::Status, 16).not_null())
                    .col(timestamp_with_time_zone(Inquiry::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Inquiry::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Inquiry {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Company,
    Message,
    Source,
    Product,
    Status,
    CreatedAt,
}
