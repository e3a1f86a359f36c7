//! # Google OAuth 2.0 인증 서비스
//!
//! Google OAuth 2.0 Authorization Code Flow를 통한 소셜 로그인을
//! 제공합니다.
//!
//! ## 인증 플로우
//!
//! 1. `authorize_url()` - state를 포함한 Google 인증 URL 생성
//! 2. 사용자가 Google에서 인증 후 콜백으로 복귀
//! 3. `authenticate_with_code()` - state 검증, 코드 교환, 프로필
//!    조회, 사용자 확정
//!
//! ## CSRF 방지 (State Parameter)
//!
//! state는 `{timestamp}.{hex(sha256("{timestamp}:{secret}"))}` 형식으로
//! 생성되며, 콜백에서 서명 재계산과 만료 시간(10분)을 검증합니다.
//! 저장소 없이 검증 가능하므로 서버를 수평 확장해도 동작합니다.

use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::config::GoogleOAuthConfig;
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::entities::user::User;
use crate::domain::models::google::{GoogleTokenResponse, GoogleUserInfo};
use crate::repositories::UserRepository;

/// state 매개변수 유효 시간 (초)
const STATE_MAX_AGE_SECS: u64 = 600;

/// Google OAuth 2.0 인증 서비스
///
/// 코드 교환과 사용자 정보 조회는 주입된 `reqwest::Client`를
/// 재사용합니다.
pub struct GoogleAuthService {
    config: GoogleOAuthConfig,
    state_secret: String,
    http_client: reqwest::Client,
    user_repository: Arc<UserRepository>,
}

impl GoogleAuthService {
    pub fn new(
        config: GoogleOAuthConfig,
        state_secret: String,
        user_repository: Arc<UserRepository>,
    ) -> Self {
        Self {
            config,
            state_secret,
            http_client: reqwest::Client::new(),
            user_repository,
        }
    }

    /// Google OAuth 인증 URL 생성
    ///
    /// 사용자를 리다이렉트할 Authorization URL을 반환합니다.
    /// 요청 스코프는 `profile email`입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - state 생성 실패
    pub fn authorize_url(&self) -> Result<String, AppError> {
        let state = self.generate_oauth_state()?;

        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", "profile email"),
            ("response_type", "code"),
            ("state", state.as_str()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("{}?{}", self.config.auth_uri, query_string))
    }

    /// Authorization Code로 사용자 인증 및 계정 확정
    ///
    /// # 처리 단계
    ///
    /// 1. state 검증 (CSRF 방지)
    /// 2. 코드를 액세스 토큰으로 교환
    /// 3. Google UserInfo API로 프로필 조회
    /// 4. `google_id`로 기존 사용자 조회, 없으면 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증된 사용자 (기존 또는 신규)
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - state 검증 실패
    /// * `AppError::ProviderError` - Google API 오류 또는 이메일 없는 프로필
    pub async fn authenticate_with_code(
        &self,
        auth_code: &str,
        state: &str,
    ) -> Result<User, AppError> {
        self.verify_oauth_state(state)?;

        let token_response = self.exchange_code_for_token(auth_code).await?;
        let google_user = self.get_user_info(&token_response.access_token).await?;

        self.resolve_user(google_user).await
    }

    /// Google 프로필로 사용자 확정 (조회 또는 생성)
    ///
    /// 같은 Google 계정으로 동시에 첫 로그인하면 한쪽의 삽입이
    /// 유니크 인덱스 위반으로 실패합니다. 그 경우 먼저 생성된
    /// 사용자를 다시 조회하여 반환합니다.
    async fn resolve_user(&self, google_user: GoogleUserInfo) -> Result<User, AppError> {
        let email = google_user.primary_email()?;

        if let Some(existing) = self
            .user_repository
            .find_by_google_id(&google_user.id)
            .await?
        {
            log::info!("Google 사용자 로그인: {}", existing.email);
            return Ok(existing);
        }

        let new_user = User::new_google(
            google_user.id.clone(),
            email,
            google_user.display_name(),
        );

        match self.user_repository.create(new_user).await {
            Ok(created) => {
                log::info!("새 Google 사용자 등록: {}", created.email);
                Ok(created)
            }
            Err(AppError::ConflictError(_)) => {
                // 동시 첫 로그인의 패자: 승자가 만든 계정을 재조회
                self.user_repository
                    .find_by_google_id(&google_user.id)
                    .await?
                    .ok_or_else(|| {
                        AppError::InternalError("Google 사용자 확정 실패".to_string())
                    })
            }
            Err(e) => Err(e),
        }
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// # Errors
    ///
    /// * `AppError::ProviderError` - Google API 통신 오류
    async fn exchange_code_for_token(
        &self,
        auth_code: &str,
    ) -> Result<GoogleTokenResponse, AppError> {
        let params = [
            ("code", auth_code),
            ("client_id", &self.config.client_id),
            ("client_secret", &self.config.client_secret),
            ("redirect_uri", &self.config.redirect_uri),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http_client
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ProviderError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ProviderError(format!(
                "Google 토큰 교환 실패: {}",
                error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ProviderError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 Google 사용자 정보 조회
    async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let response = self
            .http_client
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::ProviderError(format!("Google 사용자 정보 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ProviderError(format!(
                "Google 사용자 정보 조회 실패: {}",
                error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ProviderError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }

    /// OAuth State 매개변수 생성
    ///
    /// `{timestamp}.{digest}` 형식. digest는
    /// `sha256("{timestamp}:{secret}")`의 16진수 표현입니다.
    fn generate_oauth_state(&self) -> Result<String, AppError> {
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("시간 계산 실패")?
            .as_secs();

        Ok(format!(
            "{}.{}",
            timestamp,
            state_digest(timestamp, &self.state_secret)
        ))
    }

    /// OAuth State 매개변수 검증
    ///
    /// 서명을 재계산하여 비교하고 만료 시간(10분)을 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 형식 오류, 서명 불일치, 만료
    fn verify_oauth_state(&self, state: &str) -> Result<(), AppError> {
        use std::time::{SystemTime, UNIX_EPOCH};

        let invalid =
            || AppError::AuthenticationError("유효하지 않은 OAuth state".to_string());

        let (timestamp_str, digest) = state.split_once('.').ok_or_else(invalid)?;
        let timestamp: u64 = timestamp_str.parse().map_err(|_| invalid())?;

        if digest != state_digest(timestamp, &self.state_secret) {
            return Err(invalid());
        }

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("시간 계산 실패")?
            .as_secs();

        if now.saturating_sub(timestamp) > STATE_MAX_AGE_SECS {
            return Err(AppError::AuthenticationError(
                "만료된 OAuth state".to_string(),
            ));
        }

        Ok(())
    }
}

fn state_digest(timestamp: u64, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(timestamp.to_string().as_bytes());
    hasher.update(b":");
    hasher.update(secret.as_bytes());

    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_digest_is_deterministic() {
        assert_eq!(state_digest(1700000000, "secret"), state_digest(1700000000, "secret"));
        assert_ne!(state_digest(1700000000, "secret"), state_digest(1700000001, "secret"));
        assert_ne!(state_digest(1700000000, "secret"), state_digest(1700000000, "other"));
    }
}
