pub use super::booking_item::Entity as BookingItem;
pub use super::item::Entity as Item;
pub use super::item_booking::Entity as ItemBooking;
pub use super::user::Entity as User;
pub use super::user_achievement::Entity as UserAchievement;
