//! 요청/응답 DTO

pub mod auth;
pub mod items;
pub mod users;
