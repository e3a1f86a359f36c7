//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증(이메일/패스워드)과 Google OAuth 인증을 모두 지원하는
//! 통합된 사용자 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
///
/// ## 불변식
///
/// - 로컬 계정은 `password_hash`가 있고 `google_id`가 없다.
/// - 연합(Google) 계정은 `google_id`가 있고 `password_hash`가 없다.
/// - 토큰과 세션 키에는 `id` 외의 어떤 값도 포함되지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 생성 시 할당하는 불변 식별자
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호 (OAuth 사용자의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Google 프로바이더 사용자 ID (로컬 사용자의 경우 None, unique)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    /// 프로바이더 프로필에서 가져온 표시 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    pub fn new_local(email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            password_hash: Some(password_hash),
            google_id: None,
            display_name: None,
            auth_provider: AuthProvider::Local,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 Google OAuth 사용자 생성
    ///
    /// 연합 계정은 비밀번호 해시를 가지지 않습니다.
    pub fn new_google(google_id: String, email: String, display_name: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            password_hash: None,
            google_id: Some(google_id),
            display_name: Some(display_name),
            auth_provider: AuthProvider::Google,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_user_invariants() {
        let user = User::new_local("a@x.com".to_string(), "$2b$10$hash".to_string());

        assert!(user.password_hash.is_some());
        assert!(user.google_id.is_none());
        assert_eq!(user.auth_provider, AuthProvider::Local);
    }

    #[test]
    fn test_google_user_invariants() {
        let user = User::new_google(
            "google-123".to_string(),
            "g@x.com".to_string(),
            "홍길동".to_string(),
        );

        assert!(user.password_hash.is_none());
        assert_eq!(user.google_id.as_deref(), Some("google-123"));
        assert_eq!(user.auth_provider, AuthProvider::Google);
    }

    #[test]
    fn test_id_string_before_insert_is_none() {
        let user = User::new_local("a@x.com".to_string(), "h".to_string());
        assert!(user.id_string().is_none());
    }
}
