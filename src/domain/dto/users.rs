//! 사용자 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::AuthProvider;
use crate::domain::entities::user::User;

/// 사용자 정보 부분 업데이트 요청
///
/// 전달된 필드만 변경됩니다. 비밀번호가 포함되면 재해싱됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 변경할 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    /// 변경할 비밀번호 (평문, 저장 전 재해싱)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// 변경할 필드가 하나도 없는 요청인지 확인
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// 민감 정보를 제거한 사용자 응답 DTO
///
/// 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub auth_provider: AuthProvider,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email,
            display_name: user.display_name,
            auth_provider: user.auth_provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_is_empty() {
        let empty = UpdateUserRequest {
            email: None,
            password: None,
        };
        assert!(empty.is_empty());

        let with_email = UpdateUserRequest {
            email: Some("new@example.com".to_string()),
            password: None,
        };
        assert!(!with_email.is_empty());
    }

    #[test]
    fn test_user_response_excludes_password_hash() {
        let user = User::new_local("a@x.com".to_string(), "$2b$10$hash".to_string());
        let response = UserResponse::from(user);

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("a@x.com"));
    }
}
