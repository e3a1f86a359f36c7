//! 재고 관리 서비스 백엔드
//!
//! Rust 기반의 재고 관리 REST API 서비스입니다.
//! JWT 토큰 기반 인증, Google OAuth 2.0 소셜 로그인,
//! 그리고 재고 아이템 CRUD를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 로컬 계정 생성, 정보 수정, 계정 삭제
//! - **JWT 인증**: 액세스 토큰 기반 상태 없는 인증
//! - **OAuth 2.0**: Google 소셜 로그인 및 세션 쿠키 지원
//! - **아이템 관리**: 재고 아이템 생성, 조회, 수정, 삭제
//! - **MongoDB**: 사용자 및 재고 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 의존성은 애플리케이션 시작 시점에 명시적으로 조립되어
//! `AppState`로 주입됩니다.

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
