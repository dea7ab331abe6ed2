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
                    .table(UserAchievement::Table)
                    .if_not_exists()
                    .col(pk_auto(UserAchievement::Id))
                    .col(integer(UserAchievement::UserId))
                    .col(string(UserAchievement::Achievement))
                    .col(timestamp(UserAchievement::UnlockedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_achievement_user_id")
                            .from(UserAchievement::Table, UserAchievement::UserId)
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
            .drop_table(Table::drop().table(UserAchievement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAchievement {
    Table,
    Id,
    UserId,
    Achievement,
    UnlockedAt,
}
