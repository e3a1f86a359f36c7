//! 인증 요청/응답 DTO
//!
//! 회원가입, 로그인, OAuth 콜백에 사용되는 HTTP 데이터 구조를
//! 정의합니다. 클라이언트 입력 데이터의 검증과 타입 안전성을
//! 보장합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 8자)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,
}

/// 로그인 요청 DTO
///
/// 로그인 실패 원인을 응답에서 구분하지 않으므로 형식 검증도
/// 이메일 형식 확인 정도로 최소화합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 로그인 성공 시 발급되는 Bearer 토큰 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT 액세스 토큰
    pub token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

impl TokenResponse {
    /// 발급된 토큰을 표준 응답 형태로 감쌉니다.
    pub fn bearer(token: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// Google OAuth 콜백 쿼리 매개변수
///
/// 사용자가 인증을 거부한 경우 `code` 대신 `error`가 전달됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthCallbackQuery {
    /// Authorization Code
    #[serde(default)]
    pub code: String,
    /// CSRF 방지용 state 값
    #[serde(default)]
    pub state: String,
    /// 프로바이더가 전달한 에러 코드
    pub error: Option<String>,
    /// 에러 상세 설명
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validation() {
        let valid = SignupRequest {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SignupRequest {
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = SignupRequest {
            email: "user@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_token_response_bearer() {
        let response = TokenResponse::bearer("abc".to_string(), 3600);
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
    }

    #[test]
    fn test_callback_query_deserializes_error_variant() {
        let query: OAuthCallbackQuery =
            serde_json::from_str(r#"{"error":"access_denied"}"#).unwrap();
        assert!(query.code.is_empty());
        assert_eq!(query.error.as_deref(), Some("access_denied"));
    }
}
