//! 재고 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결을 설정하고 JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use inventory_service_backend::config::AppConfig;
use inventory_service_backend::core::state::AppState;
use inventory_service_backend::db::Database;
use inventory_service_backend::repositories::{ItemRepository, UserRepository};
use inventory_service_backend::routes::configure_all_routes;
use inventory_service_backend::services::auth::{
    GoogleAuthService, PasswordService, SessionService, TokenService,
};
use inventory_service_backend::services::items::ItemService;
use inventory_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 재고 관리 서비스 시작중...");

    // 필수 환경변수가 없으면 기동 중단
    let config = match AppConfig::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!("설정 로드 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let state = match initialize_app_state(config.clone()).await {
        Ok(state) => state,
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

/// 데이터베이스 연결과 서비스 의존성을 조립합니다
///
/// 모든 서비스는 여기서 한 번 생성되어 `AppState`로 공유됩니다.
/// 유니크 제약 인덱스도 이 시점에 생성됩니다.
async fn initialize_app_state(
    config: Arc<AppConfig>,
) -> Result<AppState, inventory_service_backend::core::errors::AppError> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new(&config.database).await?);

    let user_repository = Arc::new(UserRepository::new(database.clone()));
    let item_repository = Arc::new(ItemRepository::new(database));

    user_repository.create_indexes().await?;
    info!("✅ 유니크 인덱스 준비 완료");

    let password_service = Arc::new(PasswordService::new(config.auth.bcrypt_cost));
    let token_service = Arc::new(TokenService::new(&config.auth.jwt_secret));
    let session_service = Arc::new(SessionService::new(
        config.auth.session_secret.clone(),
        user_repository.clone(),
    ));
    let google_auth_service = Arc::new(GoogleAuthService::new(
        config.google.clone(),
        config.auth.session_secret.clone(),
        user_repository.clone(),
    ));

    let user_service = Arc::new(UserService::new(user_repository, password_service));
    let item_service = Arc::new(ItemService::new(item_repository));

    Ok(AppState {
        config,
        user_service,
        item_service,
        token_service,
        session_service,
        google_auth_service,
    })
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = format!(
        "{}:{}",
        state.config.server.bind_address, state.config.server.port
    );

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors();
        let state = state.clone();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| configure_all_routes(cfg, &state))
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS 설정입니다. 개발환경에서
/// 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
