//! HTTP route handlers

pub mod feed;
pub mod playlist;
pub mod users;
