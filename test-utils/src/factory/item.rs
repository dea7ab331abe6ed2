//! Item factory for creating test catalog items.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test items with customizable fields.
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: f64,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"` where id is auto-incremented
    /// - price: `25.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Item {}", id),
            price: 25.0,
        }
    }

    /// Sets the item name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the item price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::item::Model)` - Created item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item with default values.
///
/// Shorthand for `ItemFactory::new(db).build().await`.
pub async fn create_item(db: &DatabaseConnection) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db).build().await
}
