//! # 애플리케이션 상태
//!
//! 핸들러와 미들웨어가 공유하는 의존성 컨테이너입니다.
//! 모든 서비스와 리포지토리는 애플리케이션 시작 시점에 명시적으로
//! 조립되어 `web::Data<AppState>`로 주입됩니다. 전역 레지스트리나
//! 런타임 조회는 사용하지 않습니다.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::auth::{GoogleAuthService, SessionService, TokenService};
use crate::services::items::ItemService;
use crate::services::users::UserService;

/// 공유 애플리케이션 상태
///
/// `main`에서 한 번 구성되어 actix 워커 전체에 공유됩니다.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub user_service: Arc<UserService>,
    pub item_service: Arc<ItemService>,
    pub token_service: Arc<TokenService>,
    pub session_service: Arc<SessionService>,
    pub google_auth_service: Arc<GoogleAuthService>,
}
