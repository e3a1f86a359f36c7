//! # 사용자 서비스 구현
//!
//! 회원가입, 자격 증명 검증, 사용자 정보 수정/삭제의 비즈니스
//! 로직을 담당합니다.

use std::sync::Arc;

use mongodb::bson::{doc, DateTime, Document};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::UpdateUserRequest;
use crate::domain::entities::user::User;
use crate::repositories::UserRepository;
use crate::services::auth::PasswordService;

/// 사용자 관리 서비스
pub struct UserService {
    user_repository: Arc<UserRepository>,
    password_service: Arc<PasswordService>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<UserRepository>,
        password_service: Arc<PasswordService>,
    ) -> Self {
        Self {
            user_repository,
            password_service,
        }
    }

    /// 로컬 계정 회원가입
    ///
    /// 비밀번호를 해싱하고 사용자를 생성합니다. 이메일 중복은
    /// 유니크 인덱스 위반으로 감지되어 `ConflictError`가 됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 등록된 이메일
    /// * `AppError::CryptoError` - 비밀번호 해싱 실패
    pub async fn signup(&self, email: &str, password: &str) -> AppResult<User> {
        let password_hash = self.password_service.hash_password(password)?;
        let user = User::new_local(email.to_string(), password_hash);

        let created = self.user_repository.create(user).await?;
        log::info!(
            "✅ 회원가입 완료: {} ({})",
            created.email,
            created.auth_provider.as_str()
        );

        Ok(created)
    }

    /// 로그인 자격 증명 검증
    ///
    /// 존재하지 않는 이메일, 비밀번호 없는 연합 계정, 틀린
    /// 비밀번호는 모두 동일한 `InvalidCredentials`로 반환됩니다.
    /// 응답으로 계정 존재 여부를 알 수 없어야 합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 검증된 사용자
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 자격 증명 불일치
    pub async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let Some(password_hash) = user.password_hash.as_deref() else {
            // 연합 계정은 비밀번호 로그인 불가
            return Err(AppError::InvalidCredentials);
        };

        if !self
            .password_service
            .verify_password(password, password_hash)?
        {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 사용자가 존재하지 않음
    pub async fn find_by_id(&self, id: &str) -> AppResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 사용자 정보 부분 수정
    ///
    /// 전달된 필드만 변경합니다. 비밀번호는 새로 해싱되어
    /// 저장됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 변경할 필드가 없음
    /// * `AppError::NotFound` - 해당 사용자가 존재하지 않음
    /// * `AppError::ConflictError` - 변경된 이메일이 이미 사용 중
    pub async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> AppResult<User> {
        if request.is_empty() {
            return Err(AppError::ValidationError(
                "변경할 필드가 없습니다".to_string(),
            ));
        }

        let mut update_doc = Document::new();

        if let Some(email) = &request.email {
            update_doc.insert("email", email);
        }

        if let Some(password) = &request.password {
            let password_hash = self.password_service.hash_password(password)?;
            update_doc.insert("password_hash", password_hash);
        }

        update_doc.insert("updated_at", DateTime::now());

        self.user_repository
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 사용자 영구 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 사용자가 존재하지 않음
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        if !self.user_repository.delete(id).await? {
            return Err(AppError::NotFound(
                "사용자를 찾을 수 없습니다".to_string(),
            ));
        }

        log::info!("사용자 삭제 완료: {}", id);
        Ok(())
    }
}
