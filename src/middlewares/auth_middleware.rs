//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를
//! Request Extensions에 저장합니다. 보호된 라우트는 이 미들웨어를
//! 통과해야 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
///
/// 애플리케이션 시작 시점에 `TokenService`를 주입받아 생성합니다.
pub struct AuthMiddleware {
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpResponse};

    use super::*;
    use crate::domain::models::auth::AuthenticatedUser;

    async fn protected_echo(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "user_id": user.user_id }))
    }

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new("middleware-test-secret"))
    }

    #[actix_web::test]
    async fn test_valid_bearer_token_passes() {
        let svc = token_service();
        let token = svc.issue("507f1f77bcf86cd799439011").unwrap();

        let app = test::init_service(
            App::new().service(
                web::resource("/protected")
                    .wrap(AuthMiddleware::new(svc))
                    .route(web::get().to(protected_echo)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = test::init_service(
            App::new().service(
                web::resource("/protected")
                    .wrap(AuthMiddleware::new(token_service()))
                    .route(web::get().to(protected_echo)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_garbage_token_is_unauthorized() {
        let app = test::init_service(
            App::new().service(
                web::resource("/protected")
                    .wrap(AuthMiddleware::new(token_service()))
                    .route(web::get().to(protected_echo)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_wrong_key_token_is_unauthorized() {
        let other = TokenService::new("some-other-secret");
        let token = other.issue("507f1f77bcf86cd799439011").unwrap();

        let app = test::init_service(
            App::new().service(
                web::resource("/protected")
                    .wrap(AuthMiddleware::new(token_service()))
                    .route(web::get().to(protected_echo)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
