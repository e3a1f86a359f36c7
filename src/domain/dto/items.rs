//! 아이템 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::item::Item;

/// 아이템 생성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItemRequest {
    /// 아이템 이름 (필수)
    #[validate(length(min = 1, max = 200, message = "아이템 이름은 1-200자 사이여야 합니다"))]
    pub name: String,

    pub description: Option<String>,

    /// 재고 수량 (기본값: 0)
    #[serde(default)]
    pub quantity: i64,

    /// 단가 (기본값: 0.0)
    #[serde(default)]
    pub price: f64,

    pub category: Option<String>,

    pub image: Option<String>,
}

/// 아이템 부분 업데이트 요청
///
/// 전달된 필드만 변경됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, max = 200, message = "아이템 이름은 1-200자 사이여야 합니다"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// 아이템 응답 DTO
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id_string().unwrap_or_default(),
            created_at: item.created_at.try_to_rfc3339_string().unwrap_or_default(),
            name: item.name,
            description: item.description,
            quantity: item.quantity,
            price: item.price,
            category: item.category,
            image: item.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_item_defaults() {
        let request: CreateItemRequest =
            serde_json::from_str(r#"{"name":"드라이버 세트"}"#).unwrap();

        assert_eq!(request.quantity, 0);
        assert_eq!(request.price, 0.0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_item_rejects_empty_name() {
        let request: CreateItemRequest = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
