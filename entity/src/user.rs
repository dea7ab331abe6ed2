use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stored lowercased; uniqueness enforced by the schema.
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string. Absent for webhook-created identities.
    pub password_hash: Option<String>,
    /// Identity id assigned by the external auth provider.
    pub external_id: Option<String>,
    pub name: String,
    pub role: UserRole,
    pub verified: bool,
    pub otp_code: Option<String>,
    pub otp_expires_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item_booking::Entity")]
    ItemBooking,
    #[sea_orm(has_many = "super::user_achievement::Entity")]
    UserAchievement,
}

impl Related<super::item_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemBooking.def()
    }
}

impl Related<super::user_achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAchievement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
