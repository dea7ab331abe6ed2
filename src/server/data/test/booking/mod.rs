use chrono::NaiveDate;
use entity::item_booking::BookingStatus;
use sea_orm::{DbErr, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::booking::BookingRepository,
    model::booking::{CreateBookingLineParam, CreateBookingParam},
};

mod create;
mod list_for_user;
mod settle;

fn checkout_param(user_id: i32, item_id: i32) -> CreateBookingParam {
    CreateBookingParam {
        user_id,
        amount: 120.0,
        payment_mode: entity::item_booking::PaymentMode::Card,
        lines: vec![
            CreateBookingLineParam {
                item_id,
                quantity: 2,
                start_date: NaiveDate::from_ymd_opt(2026, 9, 1),
                end_date: NaiveDate::from_ymd_opt(2026, 9, 4),
            },
            CreateBookingLineParam {
                item_id,
                quantity: 1,
                start_date: None,
                end_date: None,
            },
        ],
    }
}
