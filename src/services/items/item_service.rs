//! # 아이템 서비스 구현
//!
//! 재고 아이템 CRUD의 비즈니스 로직을 담당합니다.

use std::sync::Arc;

use mongodb::bson::Document;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::items::{CreateItemRequest, UpdateItemRequest};
use crate::domain::entities::item::Item;
use crate::repositories::ItemRepository;

/// 아이템 관리 서비스
pub struct ItemService {
    item_repository: Arc<ItemRepository>,
}

impl ItemService {
    pub fn new(item_repository: Arc<ItemRepository>) -> Self {
        Self { item_repository }
    }

    /// 새 아이템 생성
    pub async fn create_item(&self, request: CreateItemRequest) -> AppResult<Item> {
        let item = Item::new(
            request.name,
            request.description,
            request.quantity,
            request.price,
            request.category,
            request.image,
        );

        let created = self.item_repository.create(item).await?;
        log::info!("아이템 생성 완료: {}", created.name);

        Ok(created)
    }

    /// 전체 아이템 목록 조회
    pub async fn list_items(&self) -> AppResult<Vec<Item>> {
        self.item_repository.find_all().await
    }

    /// ID로 아이템 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 아이템이 존재하지 않음
    pub async fn find_by_id(&self, id: &str) -> AppResult<Item> {
        self.item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("아이템을 찾을 수 없습니다".to_string()))
    }

    /// 아이템 부분 수정
    ///
    /// 전달된 필드만 변경합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 변경할 필드가 없음
    /// * `AppError::NotFound` - 해당 아이템이 존재하지 않음
    pub async fn update_item(&self, id: &str, request: &UpdateItemRequest) -> AppResult<Item> {
        let mut update_doc = Document::new();

        if let Some(name) = &request.name {
            update_doc.insert("name", name);
        }
        if let Some(description) = &request.description {
            update_doc.insert("description", description);
        }
        if let Some(quantity) = request.quantity {
            update_doc.insert("quantity", quantity);
        }
        if let Some(price) = request.price {
            update_doc.insert("price", price);
        }
        if let Some(category) = &request.category {
            update_doc.insert("category", category);
        }
        if let Some(image) = &request.image {
            update_doc.insert("image", image);
        }

        if update_doc.is_empty() {
            return Err(AppError::ValidationError(
                "변경할 필드가 없습니다".to_string(),
            ));
        }

        self.item_repository
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("아이템을 찾을 수 없습니다".to_string()))
    }

    /// 아이템 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 아이템이 존재하지 않음
    pub async fn delete_item(&self, id: &str) -> AppResult<()> {
        if !self.item_repository.delete(id).await? {
            return Err(AppError::NotFound(
                "아이템을 찾을 수 없습니다".to_string(),
            ));
        }

        Ok(())
    }
}
