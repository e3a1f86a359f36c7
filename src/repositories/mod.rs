//! # 리포지토리 계층
//!
//! MongoDB 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 서비스 계층은 이 모듈을 통해서만 데이터베이스에 접근합니다.

pub mod items;
pub mod users;

pub use items::ItemRepository;
pub use users::UserRepository;
