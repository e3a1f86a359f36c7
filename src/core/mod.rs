//! 핵심 공통 모듈
//!
//! 전역 에러 시스템과 애플리케이션 상태를 포함합니다.

pub mod errors;
pub mod state;

pub use errors::{AppError, AppResult};
