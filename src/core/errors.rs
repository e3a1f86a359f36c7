//! # 애플리케이션 에러 처리 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 결합하여 모든 에러가
//! 일관된 HTTP 응답으로 변환되도록 보장합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `ConflictError` | 400 Bad Request | 중복 이메일/외부 ID |
//! | `InvalidCredentials` | 400 Bad Request | 로그인 실패 (원인 비구분) |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 누락/만료/위조 |
//! | `AuthorizationError` | 403 Forbidden | 권한 부족 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `CryptoError` | 500 Internal Server Error | 저장된 해시 손상 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `ProviderError` | 500 Internal Server Error | OAuth 프로바이더 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 5xx 계열 에러는 원인을 서버 로그에만 남기고 클라이언트에는
//! 일반화된 메시지만 반환합니다. 비밀번호, 토큰 등 민감 정보는
//! 어떤 로그에도 포함하지 않습니다.

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증 서브시스템과 아이템 CRUD에서 발생할 수 있는 모든 에러를
/// 포괄하는 열거형입니다. `ResponseError` 구현을 통해 핸들러에서
/// `?` 연산자만으로 적절한 HTTP 응답이 생성됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 실패 (필수 필드 누락, 형식 오류 등)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 중복 데이터 생성 시도 (이메일, OAuth 외부 ID 유니크 제약 위반)
    ///
    /// 유니크 인덱스 위반을 저장소 계층에서 감지하여 변환합니다.
    /// 게이트웨이에서의 check-then-write 경쟁은 존재하지 않습니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 로그인 실패
    ///
    /// 존재하지 않는 이메일과 잘못된 비밀번호가 동일한 에러로
    /// 처리됩니다. 사용자 열거 공격을 방지하기 위해 원인을
    /// 응답에서 구분하지 않습니다.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// 인증 실패 (토큰 누락, 만료, 서명 불일치, 형식 오류)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 요청된 리소스가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장된 비밀번호 해시가 손상됨 (잘못된 비밀번호는 에러가 아님)
    #[error("Crypto error: {0}")]
    CryptoError(String),

    /// MongoDB 연산 오류
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// OAuth 프로바이더 오류 (토큰 교환 실패, 프로필 단언 손상 등)
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// 예상하지 못한 시스템 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 5xx 계열 에러 여부
    ///
    /// 서버 내부 원인을 클라이언트에 노출하지 않아야 하는 에러입니다.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AppError::CryptoError(_)
                | AppError::DatabaseError(_)
                | AppError::ProviderError(_)
                | AppError::InternalError(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식의 JSON 입니다.
    /// 5xx 에러는 실제 원인을 로그에 기록하고 일반화된 메시지로
    /// 대체합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_)
            | AppError::ConflictError(_)
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if self.is_server_error() {
            log::error!("서버 에러 발생: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({ "error": message }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let parsed = config_value.parse::<u16>()
///     .context("포트 번호 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("이메일은 필수입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_error_maps_to_bad_request() {
        // 중복 가입은 409가 아닌 400으로 응답한다
        let error = AppError::ConflictError("이미 사용 중인 이메일입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_credentials_response() {
        let error = AppError::InvalidCredentials;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_server_errors_map_to_500() {
        for error in [
            AppError::CryptoError("손상된 해시".to_string()),
            AppError::DatabaseError("연결 끊김".to_string()),
            AppError::ProviderError("토큰 교환 실패".to_string()),
            AppError::InternalError("예상치 못한 오류".to_string()),
        ] {
            assert!(error.is_server_error());
            assert_eq!(
                error.error_response().status(),
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
