//! Database schema.
//!
//! Applied at startup straight through a [`SchemaManager`]; every statement
//! is idempotent, so restarting against an existing store is a no-op and no
//! migration bookkeeping table is written.

use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;

/// Create the cats table and its name index if they do not exist.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let manager = SchemaManager::new(db);

    // AUTOINCREMENT on SQLite keeps ids from being reused after deletes
    manager
        .create_table(
            Table::create()
                .table(Cats::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Cats::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Cats::Name).string().not_null())
                .col(ColumnDef::new(Cats::Breed).string().not_null())
                .col(ColumnDef::new(Cats::Age).double().not_null())
                .col(ColumnDef::new(Cats::Weight).double().not_null())
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .if_not_exists()
                .name("idx_cats_name")
                .table(Cats::Table)
                .col(Cats::Name)
                .to_owned(),
        )
        .await
}

#[derive(Iden)]
enum Cats {
    Table,
    Id,
    Name,
    Breed,
    Age,
    Weight,
}
