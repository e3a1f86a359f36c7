//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 사용자, 아이템 관련 라우트와 헬스체크 엔드포인트를
//! 포함합니다.
//!
//! # 인증 레벨
//!
//! - Public: 회원가입, 로그인, 로그아웃, OAuth 플로우, 아이템 CRUD
//! - Protected: `/protected` (Bearer 토큰 필수), `/auth/session` (세션 쿠키 필수)

use actix_web::web;
use serde_json::json;

use crate::core::state::AppState;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `state` - 공유 애플리케이션 상태
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(health_check);

    configure_auth_routes(cfg, state);
    configure_user_routes(cfg);
    configure_item_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// ## 로컬 인증
/// - `POST /signup` - 회원가입
/// - `POST /login` - 이메일/비밀번호 로그인
/// - `POST /logout` - 로그아웃
/// - `GET /protected` - 인증 확인용 보호 라우트
///
/// ## OAuth (Google)
/// - `GET /auth/google` - Google 인증 페이지로 리다이렉트
/// - `GET /auth/google/callback` - Google OAuth 콜백 처리
/// - `GET /auth/session` - 세션 쿠키로 현재 사용자 조회
fn configure_auth_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(handlers::auth::signup)
        .service(handlers::auth::login)
        .service(handlers::auth::logout)
        .service(handlers::auth::google_login)
        .service(handlers::auth::google_callback)
        .service(handlers::auth::session_user);

    // Bearer 토큰 필수 라우트
    cfg.service(
        web::resource("/protected")
            .wrap(AuthMiddleware::new(state.token_service.clone()))
            .route(web::get().to(handlers::auth::protected)),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `PUT /user/{id}` - 사용자 정보 수정
/// - `DELETE /user/{id}` - 사용자 삭제
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 아이템 관련 라우트를 설정합니다
///
/// - `POST /api/items` - 아이템 생성
/// - `GET /api/items` - 전체 목록 조회
/// - `GET /api/items/{id}` - 단일 아이템 조회
/// - `PUT /api/items/{id}` - 아이템 수정
/// - `DELETE /api/items/{id}` - 아이템 삭제
fn configure_item_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/items")
            .service(handlers::items::create_item)
            .service(handlers::items::list_items)
            .service(handlers::items::get_item)
            .service(handlers::items::update_item)
            .service(handlers::items::delete_item),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데
/// 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "inventory_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
