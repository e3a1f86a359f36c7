//! # 사용자 리포지토리
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다. MongoDB `users` 컬렉션을
//! 사용하며, 이메일과 Google ID의 유니크 제약은 컬렉션 인덱스가
//! 보장합니다.
//!
//! ## 동시성
//!
//! 중복 검사는 조회 후 삽입(check-then-write)이 아니라 유니크 인덱스
//! 위반(E11000)을 `ConflictError`로 변환하는 방식으로 처리합니다.
//! 동일 이메일에 대한 동시 가입 요청은 정확히 하나만 성공하고
//! 나머지는 `ConflictError`를 받습니다.

use std::sync::Arc;

use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::user::User;

/// MongoDB 유니크 인덱스 위반 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 에러가 유니크 인덱스 위반인지 판별합니다.
pub(crate) fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match &*e.kind {
        ErrorKind::Write(WriteFailure::WriteError(we)) => we.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(ce) => ce.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 사용자 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - `email` (unique): 중복 이메일 방지 및 로그인 조회
/// - `google_id` (unique, sparse): 연합 계정의 외부 식별자 조회
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection("users")
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Google 외부 식별자로 사용자 조회
    pub async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "google_id": google_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 유니크 인덱스 위반은 `ConflictError`로 변환됩니다.
    /// 사전 중복 조회는 수행하지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 또는 Google ID 중복
    pub async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection().insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("이미 등록된 사용자입니다".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 사용자 정보 부분 업데이트
    ///
    /// MongoDB `$set` 연산자로 전달된 필드만 원자적으로 변경하고
    /// 변경 후의 문서를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 업데이트된 사용자
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::ConflictError)` - 변경된 이메일이 이미 사용 중
    pub async fn update(&self, id: &str, update_doc: Document) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })
    }

    /// 사용자 영구 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 존재하지 않음
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

    /// 유니크 제약 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    /// `google_id`는 로컬 계정에 존재하지 않으므로 sparse 인덱스를
    /// 사용합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let google_id_index = IndexModel::builder()
            .keys(doc! { "google_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("google_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, google_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_write_error_is_not_duplicate_key() {
        // 인덱스 위반이 아닌 에러는 ConflictError로 변환되면 안 된다
        let error = mongodb::error::Error::custom("connection reset");
        assert!(!is_duplicate_key(&error));
    }
}
