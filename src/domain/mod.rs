//! 도메인 계층
//!
//! 엔티티, DTO, 요청 주체 모델을 포함합니다.

pub mod dto;
pub mod entities;
pub mod models;
