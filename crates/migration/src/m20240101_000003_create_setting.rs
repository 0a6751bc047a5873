//! Create `setting` table.
//!
//! Flat key/value pairs: company contact info and the admin credential pair.
//! Missing keys fall back to hardcoded defaults in the service layer, so no
//! seed rows are required.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Setting::Table)
                    .if_not_exists()
                    .col(string_len(Setting::Key, 128).primary_key())
                    .col(text(Setting::Value).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Setting::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Setting { Table, Key, Value }
