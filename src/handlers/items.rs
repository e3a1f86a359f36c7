//! # Item HTTP Handlers
//!
//! 재고 아이템 CRUD 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/items` | 아이템 생성 | 201 Created |
//! | `GET` | `/api/items` | 전체 목록 조회 | 200 OK |
//! | `GET` | `/api/items/{id}` | 단일 아이템 조회 | 200 OK |
//! | `PUT` | `/api/items/{id}` | 아이템 부분 수정 | 200 OK |
//! | `DELETE` | `/api/items/{id}` | 아이템 삭제 | 200 OK |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::items::{CreateItemRequest, ItemResponse, UpdateItemRequest};

/// 아이템 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/items`
#[post("")]
pub async fn create_item(
    state: web::Data<AppState>,
    payload: web::Json<CreateItemRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let item = state.item_service.create_item(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ItemResponse::from(item)))
}

/// 아이템 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/items`
#[get("")]
pub async fn list_items(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let items = state.item_service.list_items().await?;
    let responses: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();

    Ok(HttpResponse::Ok().json(responses))
}

/// 단일 아이템 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/items/{item_id}`
#[get("/{item_id}")]
pub async fn get_item(
    state: web::Data<AppState>,
    item_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let item = state.item_service.find_by_id(&item_id).await?;

    Ok(HttpResponse::Ok().json(ItemResponse::from(item)))
}

/// 아이템 수정 핸들러
///
/// 전달된 필드만 변경합니다.
///
/// # 엔드포인트
///
/// `PUT /api/items/{item_id}`
#[put("/{item_id}")]
pub async fn update_item(
    state: web::Data<AppState>,
    item_id: web::Path<String>,
    payload: web::Json<UpdateItemRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let item = state.item_service.update_item(&item_id, &payload).await?;

    Ok(HttpResponse::Ok().json(ItemResponse::from(item)))
}

/// 아이템 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /api/items/{item_id}`
#[delete("/{item_id}")]
pub async fn delete_item(
    state: web::Data<AppState>,
    item_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.item_service.delete_item(&item_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "아이템이 삭제되었습니다"
    })))
}
