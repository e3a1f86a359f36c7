//! Item Entity Implementation
//!
//! 재고 아이템을 표현하는 도메인 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 재고 아이템 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 아이템 이름
    pub name: String,
    /// 설명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 재고 수량
    pub quantity: i64,
    /// 단가
    pub price: f64,
    /// 분류
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// 등록 시간
    pub created_at: DateTime,
}

impl Item {
    pub fn new(
        name: String,
        description: Option<String>,
        quantity: i64,
        price: f64,
        category: Option<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            id: None,
            name,
            description,
            quantity,
            price,
            category,
            image,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_has_no_id() {
        let item = Item::new("노트북".to_string(), None, 3, 1200.0, None, None);

        assert!(item.id.is_none());
        assert!(item.id_string().is_none());
        assert_eq!(item.quantity, 3);
    }
}
