pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_user_table;
mod m20260115_000002_create_item_table;
mod m20260115_000003_create_item_booking_table;
mod m20260115_000004_create_booking_item_table;
mod m20260116_000005_create_user_achievement_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_user_table::Migration),
            Box::new(m20260115_000002_create_item_table::Migration),
            Box::new(m20260115_000003_create_item_booking_table::Migration),
            Box::new(m20260115_000004_create_booking_item_table::Migration),
            Box::new(m20260116_000005_create_user_achievement_table::Migration),
        ]
    }
}
