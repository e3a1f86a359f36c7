//! # 애플리케이션 설정 모듈
//!
//! 모든 설정을 시작 시점에 환경변수로부터 한 번 읽어 명시적인
//! `AppConfig` 구조체로 구성합니다. 서비스와 미들웨어는 이 구조체를
//! 생성자로 전달받으며, 전역 가변 상태에 의존하지 않습니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! # JWT 서명 비밀키 (기본값 없음, 미설정 시 기동 실패)
//! export JWT_SECRET="openssl rand -base64 32 로 생성한 키"
//!
//! # 세션 키 서명 비밀키 (기본값 없음)
//! export SESSION_SECRET="별도의 랜덤 키"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="inventory_dev"
//! export BIND_ADDRESS="127.0.0.1"
//! export PORT="3000"
//! export BCRYPT_COST="10"
//!
//! # Google OAuth (소셜 로그인 사용 시 필수)
//! export GOOGLE_CLIENT_ID="..."
//! export GOOGLE_CLIENT_SECRET="..."
//! export GOOGLE_REDIRECT_URI="http://localhost:3000/auth/google/callback"
//! export OAUTH_FAILURE_REDIRECT="/login"
//! export OAUTH_SUCCESS_REDIRECT="/"
//! ```

use std::env;

use crate::core::errors::{AppError, AppResult};

/// 지원하는 인증 공급자
///
/// 로컬 이메일/패스워드 인증과 Google OAuth 2.0을 지원합니다.
/// `serde` 직렬화를 지원하므로 사용자 문서에 그대로 저장됩니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 로컬 이메일/패스워드 인증 (bcrypt 해싱)
    Local,
    /// Google OAuth 2.0 인증
    Google,
}

impl AuthProvider {
    /// AuthProvider를 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
        }
    }
}

/// HTTP 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인드 주소 (기본값: 127.0.0.1)
    pub bind_address: String,
    /// 리스닝 포트 (기본값: 3000)
    pub port: u16,
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub name: String,
}

/// 인증 서브시스템 설정
///
/// JWT 서명 비밀키와 세션 비밀키는 반드시 외부에서 공급되어야 하며
/// 코드에 내장된 기본값은 존재하지 않습니다.
#[derive(Clone)]
pub struct AuthConfig {
    /// JWT 서명 비밀키 (HS256)
    pub jwt_secret: String,
    /// 세션 키 서명 비밀키
    pub session_secret: String,
    /// bcrypt cost factor (기본값: 10)
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for AuthConfig {
    // 비밀키가 로그에 노출되지 않도록 마스킹한다
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"***")
            .field("session_secret", &"***")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Google OAuth 2.0 설정
///
/// Google Cloud Console 에서 발급받은 OAuth 클라이언트 정보와
/// 인증 성공/실패 시 사용자 에이전트를 돌려보낼 목적지를 관리합니다.
#[derive(Clone)]
pub struct GoogleOAuthConfig {
    /// OAuth 클라이언트 ID
    pub client_id: String,
    /// OAuth 클라이언트 시크릿 (클라이언트 사이드 노출 금지)
    pub client_secret: String,
    /// 인증 완료 후 리디렉션될 콜백 URI
    pub redirect_uri: String,
    /// Google 인증 엔드포인트
    pub auth_uri: String,
    /// 토큰 교환 엔드포인트
    pub token_uri: String,
    /// 사용자 정보 엔드포인트
    pub userinfo_uri: String,
    /// 인증 실패 시 돌려보낼 경로 (로그인 페이지)
    pub failure_redirect: String,
    /// 인증 성공 시 돌려보낼 경로
    pub success_redirect: String,
}

impl std::fmt::Debug for GoogleOAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

/// 애플리케이션 전체 설정
///
/// 시작 시점에 한 번 구성되어 `web::Data`를 통해 모든 핸들러와
/// 서비스에 전달됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub google: GoogleOAuthConfig,
}

impl AppConfig {
    /// 환경변수로부터 설정을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 필수 환경변수 누락 또는 값 파싱 실패
    ///
    /// `JWT_SECRET`, `SESSION_SECRET`, Google OAuth 3종은 기본값 없이
    /// 필수이며, 누락 시 서버가 기동하지 않습니다.
    pub fn from_env() -> AppResult<Self> {
        let server = ServerConfig {
            bind_address: env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_parse("PORT", 3000)?,
        };

        let database = DatabaseConfig {
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "inventory_dev".to_string()),
        };

        let auth = AuthConfig {
            jwt_secret: required_env("JWT_SECRET")?,
            session_secret: required_env("SESSION_SECRET")?,
            bcrypt_cost: env_parse("BCRYPT_COST", 10)?,
        };

        let google = GoogleOAuthConfig {
            client_id: required_env("GOOGLE_CLIENT_ID")?,
            client_secret: required_env("GOOGLE_CLIENT_SECRET")?,
            redirect_uri: required_env("GOOGLE_REDIRECT_URI")?,
            auth_uri: env::var("GOOGLE_AUTH_URI")
                .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string()),
            token_uri: env::var("GOOGLE_TOKEN_URI")
                .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string()),
            userinfo_uri: env::var("GOOGLE_USERINFO_URI")
                .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string()),
            failure_redirect: env::var("OAUTH_FAILURE_REDIRECT")
                .unwrap_or_else(|_| "/login".to_string()),
            success_redirect: env::var("OAUTH_SUCCESS_REDIRECT")
                .unwrap_or_else(|_| "/".to_string()),
        };

        Ok(Self {
            server,
            database,
            auth,
            google,
        })
    }
}

/// 기본값이 없는 필수 환경변수를 읽습니다.
fn required_env(key: &str) -> AppResult<String> {
    env::var(key)
        .map_err(|_| AppError::InternalError(format!("필수 환경변수 {} 가 설정되지 않았습니다", key)))
}

/// 기본값이 있는 숫자 환경변수를 파싱합니다.
fn env_parse<T>(key: &str, default: T) -> AppResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| AppError::InternalError(format!("{} 파싱 실패: {}", key, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_as_string() {
        assert_eq!(AuthProvider::Local.as_str(), "local");
        assert_eq!(AuthProvider::Google.as_str(), "google");
    }

    #[test]
    fn test_auth_provider_serialization() {
        let provider = AuthProvider::Google;
        let json = serde_json::to_string(&provider).unwrap();
        let deserialized: AuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }

    #[test]
    fn test_auth_config_debug_masks_secrets() {
        let config = AuthConfig {
            jwt_secret: "super-secret".to_string(),
            session_secret: "another-secret".to_string(),
            bcrypt_cost: 10,
        };

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("another-secret"));
    }

    #[test]
    fn test_google_config_debug_masks_client_secret() {
        let config = GoogleOAuthConfig {
            client_id: "client-id".to_string(),
            client_secret: "client-secret-value".to_string(),
            redirect_uri: "http://localhost:3000/auth/google/callback".to_string(),
            auth_uri: String::new(),
            token_uri: String::new(),
            userinfo_uri: String::new(),
            failure_redirect: "/login".to_string(),
            success_redirect: "/".to_string(),
        };

        let rendered = format!("{:?}", config);
        assert!(rendered.contains("client-id"));
        assert!(!rendered.contains("client-secret-value"));
    }
}
