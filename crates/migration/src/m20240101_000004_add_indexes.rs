//! Secondary indexes for the read paths: category listings and
//! newest-first inquiry/product ordering.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_product_category")
                    .table(Product::Table)
                    .col(Product::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_created_at")
                    .table(Product::Table)
                    .col(Product::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inquiry_created_at")
                    .table(Inquiry::Table)
                    .col(Inquiry::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_product_category").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_product_created_at").table(Product::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_inquiry_created_at").table(Inquiry::Table).to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Product { Table, Category, CreatedAt }

#[derive(DeriveIden)]
enum Inquiry { Table, CreatedAt }
