//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let item = factory::item::create_item(&db).await?;
//!
//!     // Create a pending booking with one line
//!     let booking = factory::booking::create_booking(&db, user.id, item.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("explorer@example.com")
//!     .verified(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `item` - Create catalog item entities
//! - `booking` - Create bookings with line items
//! - `achievement` - Create unlocked achievement rows
//! - `helpers` - Counter for unique test identifiers

pub mod achievement;
pub mod booking;
pub mod helpers;
pub mod item;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use achievement::create_achievement;
pub use booking::create_booking;
pub use item::create_item;
pub use user::create_user;
