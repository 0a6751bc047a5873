//! Create `product` table.
//!
//! Catalog entries; specs and image lists are stored as JSON text blobs and
//! reconstructed by the service layer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(uuid(Product::Id).primary_key())
                    .col(string_len(Product::Title, 256).not_null())
                    .col(string_len(Product::Slug, 256).unique_key().not_null())
                    .col(string_len(Product::Category, 64).not_null())
                    .col(text_null(Product::Description))
                    .col(text_null(Product::ShortDescription))
                    .col(text(Product::SpecsJson).not_null())
                    .col(text(Product::ImagesJson).not_null())
                    .col(string_len_null(Product::RentalPrice, 64))
                    .col(boolean(Product::IsNew).not_null())
                    .col(boolean(Product::IsFeatured).not_null())
                    .col(string_len(Product::Status, 32).not_null())
                    .col(timestamp_with_time_zone(Product::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Title,
    Slug,
    Category,
    Description,
    ShortDescription,
    SpecsJson,
    ImagesJson,
    RentalPrice,
    IsNew,
    IsFeatured,
    Status,
    CreatedAt,
}
