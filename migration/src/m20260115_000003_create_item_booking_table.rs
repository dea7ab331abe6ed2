use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemBooking::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemBooking::Id))
                    .col(integer(ItemBooking::UserId))
                    .col(string_len(ItemBooking::Status, 16).default("pending"))
                    .col(string_null(ItemBooking::TransactionId))
                    .col(double(ItemBooking::Amount))
                    .col(string_len(ItemBooking::PaymentMode, 8))
                    .col(timestamp(ItemBooking::BookedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_booking_user_id")
                            .from(ItemBooking::Table, ItemBooking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemBooking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ItemBooking {
    Table,
    Id,
    UserId,
    Status,
    TransactionId,
    Amount,
    PaymentMode,
    BookedAt,
}
