//! # 서비스 계층
//!
//! 비즈니스 로직을 담당합니다. 핸들러는 이 계층을 통해서만
//! 도메인 연산을 수행합니다.

pub mod auth;
pub mod items;
pub mod users;
