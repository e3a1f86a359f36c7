//! # Google OAuth 응답 모델
//!
//! Google OAuth 2.0 토큰 엔드포인트와 UserInfo 엔드포인트의 응답을
//! 역직렬화하기 위한 데이터 모델입니다.

use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};

/// Google 토큰 교환 응답
///
/// `POST https://oauth2.googleapis.com/token` 의 성공 응답입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// Google API 호출에 사용하는 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (Bearer)
    #[serde(default)]
    pub token_type: String,
    /// 만료까지 남은 시간 (초)
    #[serde(default)]
    pub expires_in: i64,
}

/// Google UserInfo 응답
///
/// `GET https://www.googleapis.com/oauth2/v2/userinfo` 의 응답입니다.
/// 프로바이더 단언이 손상된 경우(이메일 없음 등)를 대비해
/// 필수가 아닌 필드는 모두 `Option`으로 받습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 사용자 고유 ID (외부 식별자)
    pub id: String,
    /// 사용자 이메일
    pub email: Option<String>,
    /// 표시 이름
    #[serde(default)]
    pub name: Option<String>,
}

impl GoogleUserInfo {
    /// 프로필에서 이메일을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ProviderError` - 프로필에 이메일이 없는 경우.
    ///   빈 프로필은 손상된 단언으로 간주하며 런타임 폴트를 일으키지
    ///   않습니다.
    pub fn primary_email(&self) -> AppResult<String> {
        self.email
            .as_deref()
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::ProviderError("프로필에 이메일이 포함되어 있지 않습니다".to_string())
            })
    }

    /// 표시 이름을 추출합니다. 이름이 없으면 빈 문자열을 반환합니다.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_email_present() {
        let info = GoogleUserInfo {
            id: "g-1".to_string(),
            email: Some("user@gmail.com".to_string()),
            name: Some("User".to_string()),
        };
        assert_eq!(info.primary_email().unwrap(), "user@gmail.com");
    }

    #[test]
    fn test_missing_email_is_provider_error() {
        let info = GoogleUserInfo {
            id: "g-1".to_string(),
            email: None,
            name: None,
        };

        match info.primary_email() {
            Err(AppError::ProviderError(_)) => {}
            other => panic!("ProviderError 를 기대했으나: {:?}", other),
        }
    }

    #[test]
    fn test_empty_email_is_provider_error() {
        let info = GoogleUserInfo {
            id: "g-1".to_string(),
            email: Some(String::new()),
            name: None,
        };
        assert!(matches!(
            info.primary_email(),
            Err(AppError::ProviderError(_))
        ));
    }

    #[test]
    fn test_userinfo_deserializes_partial_profile() {
        // name/email 이 빠진 응답도 역직렬화 단계에서는 실패하지 않는다
        let info: GoogleUserInfo = serde_json::from_str(r#"{"id":"123"}"#).unwrap();
        assert_eq!(info.id, "123");
        assert!(info.email.is_none());
    }
}
