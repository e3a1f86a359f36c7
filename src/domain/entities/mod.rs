//! 도메인 엔티티

pub mod item;
pub mod user;
