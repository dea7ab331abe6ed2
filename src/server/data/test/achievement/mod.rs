use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::achievement::AchievementRepository;

mod list_for_user;
