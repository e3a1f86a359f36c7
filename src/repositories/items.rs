//! # 아이템 리포지토리
//!
//! 재고 아이템의 데이터 액세스 계층입니다. MongoDB `items` 컬렉션에
//! 대한 CRUD 연산을 제공합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::item::Item;

/// 아이템 데이터 액세스 리포지토리
pub struct ItemRepository {
    db: Arc<Database>,
}

impl ItemRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Item> {
        self.db.get_database().collection("items")
    }

    /// 새 아이템 생성
    pub async fn create(&self, mut item: Item) -> AppResult<Item> {
        let result = self
            .collection()
            .insert_one(&item)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        item.id = result.inserted_id.as_object_id();

        Ok(item)
    }

    /// 전체 아이템 목록 조회
    pub async fn find_all(&self) -> AppResult<Vec<Item>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 아이템 조회
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Item>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 아이템 부분 업데이트
    ///
    /// `$set` 연산자로 전달된 필드만 변경하고 변경 후의 문서를
    /// 반환합니다. 문서가 없으면 `Ok(None)`입니다.
    pub async fn update(&self, id: &str, update_doc: Document) -> AppResult<Option<Item>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 아이템 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 아이템이 존재하지 않음
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
