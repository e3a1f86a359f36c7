//! 세션 직렬화 서비스 구현
//!
//! OAuth 로그인 사용자의 세션 식별자를 쿠키로 주고받기 위한
//! 직렬화/역직렬화를 담당합니다.
//!
//! 세션 키 형식은 `{user_id}.{digest}`이며, digest는
//! `sha256("{user_id}:{session_secret}")`의 16진수 표현입니다.
//! 비밀값을 모르면 유효한 키를 위조할 수 없습니다.

use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::core::errors::AppResult;
use crate::domain::entities::user::User;
use crate::repositories::UserRepository;

/// 세션 직렬화 서비스
pub struct SessionService {
    secret: String,
    user_repository: Arc<UserRepository>,
}

impl SessionService {
    pub fn new(secret: String, user_repository: Arc<UserRepository>) -> Self {
        Self {
            secret,
            user_repository,
        }
    }

    /// 사용자를 세션 키로 직렬화
    ///
    /// 쿠키에 저장 가능한 불투명 문자열을 반환합니다.
    pub fn serialize(&self, user_id: &str) -> String {
        format!("{}.{}", user_id, session_digest(user_id, &self.secret))
    }

    /// 세션 키를 사용자로 역직렬화
    ///
    /// 형식 오류, 서명 불일치, 삭제된 사용자는 모두 `Ok(None)`입니다.
    /// 오래된 쿠키로 인한 요청 실패를 만들지 않기 위해 세션 복원은
    /// 인증 실패가 아니라 "세션 없음"으로 처리합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 사용자 조회 실패
    pub async fn deserialize(&self, session_key: &str) -> AppResult<Option<User>> {
        let Some((user_id, digest)) = session_key.split_once('.') else {
            return Ok(None);
        };

        if digest != session_digest(user_id, &self.secret) {
            log::debug!("세션 키 서명 불일치");
            return Ok(None);
        }

        self.user_repository.find_by_id(user_id).await.or_else(|e| {
            if matches!(e, crate::core::errors::AppError::ValidationError(_)) {
                // 변조된 ID 형식은 세션 없음으로 처리
                Ok(None)
            } else {
                Err(e)
            }
        })
    }
}

/// 세션 키 서명 digest 계산
fn session_digest(user_id: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_bytes());
    hasher.update(b":");
    hasher.update(secret.as_bytes());

    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_digest_is_deterministic() {
        let a = session_digest("507f1f77bcf86cd799439011", "secret");
        let b = session_digest("507f1f77bcf86cd799439011", "secret");

        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_session_digest_depends_on_secret() {
        let a = session_digest("507f1f77bcf86cd799439011", "secret");
        let b = session_digest("507f1f77bcf86cd799439011", "other-secret");

        assert_ne!(a, b);
    }

    #[test]
    fn test_session_digest_depends_on_user_id() {
        let a = session_digest("507f1f77bcf86cd799439011", "secret");
        let b = session_digest("507f1f77bcf86cd799439012", "secret");

        assert_ne!(a, b);
    }

    #[test]
    fn test_serialized_key_format() {
        let key = format!(
            "{}.{}",
            "507f1f77bcf86cd799439011",
            session_digest("507f1f77bcf86cd799439011", "secret")
        );

        let (id, digest) = key.split_once('.').unwrap();
        assert_eq!(id, "507f1f77bcf86cd799439011");
        assert_eq!(digest, session_digest(id, "secret"));
    }

    #[test]
    fn test_tampered_key_fails_signature_check() {
        let original_id = "507f1f77bcf86cd799439011";
        let digest = session_digest(original_id, "secret");

        // digest는 그대로 두고 사용자 ID만 바꿔치기한 키
        let tampered_id = "507f1f77bcf86cd799439012";

        assert_ne!(digest, session_digest(tampered_id, "secret"));
    }
}
