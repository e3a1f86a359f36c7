//! # 사용자 서비스 모듈

pub mod user_service;

pub use user_service::UserService;
