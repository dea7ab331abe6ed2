use sea_orm::entity::prelude::*;

/// One line of an item booking.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub booking_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub purchased: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::item_booking::Entity",
        from = "Column::BookingId",
        to = "super::item_booking::Column::Id"
    )]
    ItemBooking,
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id"
    )]
    Item,
}

impl Related<super::item_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemBooking.def()
    }
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
