//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰의 생성과 검증을 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, ErrorContext};

/// 액세스 토큰 유효 기간 (초)
pub const TOKEN_EXPIRATION_SECS: i64 = 3600;

/// JWT 페이로드 클레임
///
/// `sub`에는 사용자의 MongoDB ObjectId 문자열이 들어갑니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 토큰을 생성하고 검증합니다.
/// 서명 키는 애플리케이션 시작 시점에 주입되며 폴백 값은 없습니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `user_id` - 토큰을 발급받을 사용자 ID (ObjectId 문자열)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰 (1시간 유효)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패
    pub fn issue(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(TOKEN_EXPIRATION_SECS);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).context("JWT 토큰 생성 실패")
    }

    /// JWT 토큰 검증 및 사용자 ID 추출
    ///
    /// 만료, 서명 불일치, 형식 오류는 모두 동일한 인증 에러로
    /// 변환됩니다. 실패 원인은 응답이 아니라 로그로만 구분합니다.
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 검증된 토큰의 사용자 ID
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 검증 실패
    pub fn verify(&self, token: &str) -> Result<String, AppError> {
        let validation = Validation::default();

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims.sub)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {:?}", e.kind());
                AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰
    /// 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| {
                AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret-key")
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let svc = service();
        let token = svc.issue("507f1f77bcf86cd799439011").unwrap();
        let user_id = svc.verify(&token).unwrap();

        assert_eq!(user_id, "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_token_signed_with_wrong_key_rejected() {
        let other = TokenService::new("another-secret-key");
        let token = other.issue("507f1f77bcf86cd799439011").unwrap();

        let result = service().verify(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let svc = service();
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            iat: (now - Duration::hours(3)).timestamp(),
            exp: (now - Duration::hours(2)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret-key".as_ref()),
        )
        .unwrap();

        let result = svc.verify(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_verify_failure_message_is_uniform() {
        let svc = service();

        let wrong_key_token = TokenService::new("another-secret-key")
            .issue("507f1f77bcf86cd799439011")
            .unwrap();
        let garbage = "not.a.token";

        let wrong_key_err = svc.verify(&wrong_key_token).unwrap_err();
        let garbage_err = svc.verify(garbage).unwrap_err();

        assert_eq!(wrong_key_err.to_string(), garbage_err.to_string());
    }

    #[test]
    fn test_extract_bearer_token() {
        let svc = service();

        assert_eq!(svc.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(svc.extract_bearer_token("Basic abc").is_err());
        assert!(svc.extract_bearer_token("abc.def.ghi").is_err());
    }
}
