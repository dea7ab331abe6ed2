use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000002_create_item_table::Item,
    m20260115_000003_create_item_booking_table::ItemBooking,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingItem::Table)
                    .if_not_exists()
                    .col(pk_auto(BookingItem::Id))
                    .col(integer(BookingItem::BookingId))
                    .col(integer(BookingItem::ItemId))
                    .col(integer(BookingItem::Quantity))
                    .col(date_null(BookingItem::StartDate))
                    .col(date_null(BookingItem::EndDate))
                    .col(boolean(BookingItem::Purchased).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_item_booking_id")
                            .from(BookingItem::Table, BookingItem::BookingId)
                            .to(ItemBooking::Table, ItemBooking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_item_item_id")
                            .from(BookingItem::Table, BookingItem::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookingItem {
    Table,
    Id,
    BookingId,
    ItemId,
    Quantity,
    StartDate,
    EndDate,
    Purchased,
}
