mod achievement;
mod booking;
mod user;
