//! 인증된 요청 주체 모델
//!
//! 인증 미들웨어가 토큰 검증에 성공하면 `AuthenticatedUser`를
//! Request Extensions에 저장하고, 다운스트림 핸들러는 extractor를
//! 통해 이를 꺼내 사용합니다.

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::core::errors::AppError;

/// 토큰 검증을 통과한 요청 주체
///
/// 토큰에는 사용자 ID 외의 어떤 값도 담기지 않으므로
/// 이 구조체도 ID만 보유합니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 검증된 사용자 ID (MongoDB ObjectId 문자열)
    pub user_id: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Request Extensions에서 인증된 사용자를 추출합니다.
    ///
    /// 미들웨어가 적용되지 않은 라우트에서 호출되면
    /// `AuthenticationError`로 실패합니다.
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();

        ready(user.ok_or_else(|| {
            AppError::AuthenticationError("유효한 인증 토큰이 필요합니다".to_string())
        }))
    }
}
