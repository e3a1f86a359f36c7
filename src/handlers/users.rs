//! # User Management HTTP Handlers
//!
//! 사용자 정보 수정과 삭제 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `PUT` | `/user/{id}` | 사용자 정보 부분 수정 | 200 OK |
//! | `DELETE` | `/user/{id}` | 사용자 영구 삭제 | 200 OK |

use actix_web::{delete, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::users::{UpdateUserRequest, UserResponse};

/// 사용자 수정 핸들러
///
/// 전달된 필드만 변경합니다. 비밀번호는 새로 해싱되어
/// 저장됩니다.
///
/// # 엔드포인트
///
/// `PUT /user/{user_id}`
///
/// # 응답
///
/// * `200 OK` - 수정된 사용자 정보
/// * `400 Bad Request` - 검증 실패, 빈 요청, 이메일 중복
/// * `404 Not Found` - 사용자 없음
#[put("/{user_id}")]
pub async fn update_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state.user_service.update_user(&user_id, &payload).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 삭제 핸들러
///
/// 물리적 삭제(Hard Delete)이며 복구할 수 없습니다.
///
/// # 엔드포인트
///
/// `DELETE /user/{user_id}`
///
/// # 응답
///
/// * `200 OK` - 삭제 확인 메시지
/// * `404 Not Found` - 사용자 없음
#[delete("/{user_id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.user_service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "사용자가 삭제되었습니다"
    })))
}
