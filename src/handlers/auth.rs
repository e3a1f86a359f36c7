//! # Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 로그아웃, Google OAuth 플로우의 HTTP
//! 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/signup` | 로컬 계정 회원가입 | 201 Created |
//! | `POST` | `/login` | 로그인 및 토큰 발급 | 200 OK |
//! | `POST` | `/logout` | 로그아웃 확인 응답 | 200 OK |
//! | `GET` | `/protected` | 인증 확인용 보호 라우트 | 200 OK |
//! | `GET` | `/auth/google` | Google 인증 페이지로 리다이렉트 | 302 Found |
//! | `GET` | `/auth/google/callback` | Google 콜백 처리 | 302 Found |
//! | `GET` | `/auth/session` | 세션 쿠키로 사용자 복원 | 200 OK |

use actix_web::{cookie::Cookie, get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::auth::{LoginRequest, OAuthCallbackQuery, SignupRequest, TokenResponse};
use crate::domain::dto::users::UserResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::TOKEN_EXPIRATION_SECS;

/// 세션 쿠키 이름
const SESSION_COOKIE: &str = "session";

/// 회원가입 핸들러
///
/// 로컬 인증용 사용자를 생성합니다. 토큰은 발급하지 않으며,
/// 클라이언트는 가입 후 별도로 로그인해야 합니다.
///
/// # 엔드포인트
///
/// `POST /signup`
///
/// # 응답
///
/// * `201 Created` - 생성된 사용자 정보 (비밀번호 제외)
/// * `400 Bad Request` - 검증 실패 또는 이미 등록된 이메일
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state
        .user_service
        .signup(&payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 로그인 핸들러
///
/// 자격 증명을 검증하고 JWT 액세스 토큰을 발급합니다.
/// 존재하지 않는 이메일과 틀린 비밀번호는 동일한 응답을
/// 반환합니다.
///
/// # 엔드포인트
///
/// `POST /login`
///
/// # 응답
///
/// * `200 OK` - Bearer 토큰과 만료 시간
/// * `400 Bad Request` - 자격 증명 불일치
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state
        .user_service
        .verify_credentials(&payload.email, &payload.password)
        .await?;

    let user_id = user
        .id_string()
        .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;
    let token = state.token_service.issue(&user_id)?;

    log::info!("로그인 성공: {}", user.email);

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(token, TOKEN_EXPIRATION_SECS)))
}

/// 로그아웃 핸들러
///
/// JWT는 상태가 없으므로 서버 측에서 무효화하지 않습니다.
/// 세션 쿠키를 제거하고 확인 응답을 반환합니다. 클라이언트는
/// 보관 중인 토큰을 폐기해야 합니다.
///
/// # 엔드포인트
///
/// `POST /logout`
#[post("/logout")]
pub async fn logout() -> HttpResponse {
    let expired = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .finish();

    let mut response = HttpResponse::Ok().json(serde_json::json!({
        "message": "로그아웃되었습니다"
    }));

    if let Err(e) = response.add_removal_cookie(&expired) {
        log::warn!("세션 쿠키 제거 실패: {}", e);
    }

    response
}

/// 보호 라우트 핸들러
///
/// 인증 미들웨어를 통과한 요청에 대해 현재 사용자 정보를
/// 반환합니다. 토큰 검증 동작 확인용 엔드포인트입니다.
///
/// # 엔드포인트
///
/// `GET /protected` (Bearer 토큰 필수)
///
/// # 응답
///
/// * `200 OK` - 인증된 사용자 정보
/// * `401 Unauthorized` - 토큰 없음/만료/변조
/// * `404 Not Found` - 토큰은 유효하나 사용자가 삭제됨
pub async fn protected(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.find_by_id(&auth.user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Google OAuth 시작 핸들러
///
/// 사용자를 Google 인증 페이지로 리다이렉트합니다.
///
/// # 엔드포인트
///
/// `GET /auth/google`
#[get("/auth/google")]
pub async fn google_login(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let login_url = state.google_auth_service.authorize_url()?;

    Ok(HttpResponse::Found()
        .append_header(("Location", login_url))
        .finish())
}

/// Google OAuth 콜백 핸들러
///
/// Google에서 리다이렉트된 요청을 처리합니다. 성공 시 세션
/// 쿠키를 설정하고 성공 URL로, 실패 시 원인을 로그에 남기고
/// 실패 URL로 리다이렉트합니다. 에러 상세는 클라이언트에
/// 노출되지 않습니다.
///
/// # 엔드포인트
///
/// `GET /auth/google/callback?code=...&state=...`
#[get("/auth/google/callback")]
pub async fn google_callback(
    state: web::Data<AppState>,
    query: web::Query<OAuthCallbackQuery>,
) -> HttpResponse {
    let failure_redirect = state.config.google.failure_redirect.clone();

    if let Some(error) = &query.error {
        log::warn!(
            "Google OAuth 거부: {} ({})",
            error,
            query.error_description.as_deref().unwrap_or("상세 없음")
        );
        return redirect_to(&failure_redirect);
    }

    match state
        .google_auth_service
        .authenticate_with_code(&query.code, &query.state)
        .await
    {
        Ok(user) => {
            let Some(user_id) = user.id_string() else {
                log::error!("Google 인증 사용자에 ID가 없습니다");
                return redirect_to(&failure_redirect);
            };

            let session_key = state.session_service.serialize(&user_id);
            let cookie = Cookie::build(SESSION_COOKIE, session_key)
                .path("/")
                .http_only(true)
                .finish();

            log::info!("✅ Google 로그인 성공: {}", user.email);

            let mut response = redirect_to(&state.config.google.success_redirect);
            if let Err(e) = response.add_cookie(&cookie) {
                log::error!("세션 쿠키 설정 실패: {}", e);
                return redirect_to(&failure_redirect);
            }
            response
        }
        Err(e) => {
            log::error!("Google 인증 실패: {}", e);
            redirect_to(&failure_redirect)
        }
    }
}

/// 세션 복원 핸들러
///
/// OAuth 로그인으로 설정된 세션 쿠키를 검증하고 현재 사용자를
/// 반환합니다. 쿠키가 없거나, 서명이 맞지 않거나, 사용자가
/// 삭제된 경우 모두 동일하게 401을 반환합니다.
///
/// # 엔드포인트
///
/// `GET /auth/session`
///
/// # 응답
///
/// * `200 OK` - 세션의 사용자 정보
/// * `401 Unauthorized` - 유효한 세션 없음
#[get("/auth/session")]
pub async fn session_user(
    state: web::Data<AppState>,
    request: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let Some(cookie) = request.cookie(SESSION_COOKIE) else {
        return Err(AppError::AuthenticationError(
            "유효한 세션이 필요합니다".to_string(),
        ));
    };

    let user = state
        .session_service
        .deserialize(cookie.value())
        .await?
        .ok_or_else(|| AppError::AuthenticationError("유효한 세션이 필요합니다".to_string()))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header(("Location", location.to_string()))
        .finish()
}
