use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    // Duplicate-signup conflicts surface as unique violations here
                    // rather than through a check-then-insert.
                    .col(string_uniq(User::Email))
                    .col(string_null(User::PasswordHash))
                    .col(string_null(User::ExternalId))
                    .col(string(User::Name))
                    .col(string_len(User::Role, 16).default("user"))
                    .col(boolean(User::Verified).default(false))
                    .col(string_null(User::OtpCode))
                    .col(timestamp_null(User::OtpExpiresAt))
                    .col(timestamp(User::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(User::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    PasswordHash,
    ExternalId,
    Name,
    Role,
    Verified,
    OtpCode,
    OtpExpiresAt,
    CreatedAt,
    UpdatedAt,
}
