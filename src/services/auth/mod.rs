//! # 인증 서비스 모듈
//!
//! 비밀번호 해싱, JWT 토큰, 세션 직렬화, Google OAuth를 담당하는
//! 서비스들을 제공합니다.

pub mod google_auth_service;
pub mod password_service;
pub mod session_service;
pub mod token_service;

pub use google_auth_service::GoogleAuthService;
pub use password_service::PasswordService;
pub use session_service::SessionService;
pub use token_service::{TokenService, TOKEN_EXPIRATION_SECS};
