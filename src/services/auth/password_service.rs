//! 비밀번호 해싱 서비스 구현
//!
//! bcrypt 알고리즘으로 비밀번호를 해싱하고 검증합니다.
//! 평문 비밀번호는 이 서비스 바깥으로 나가지 않습니다.

use bcrypt::{hash, verify};

use crate::core::errors::AppError;

/// 비밀번호 해싱 서비스
///
/// cost 파라미터는 환경별 설정에서 주입됩니다.
/// 운영 환경은 10 이상, 테스트는 4를 사용합니다.
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 평문 비밀번호를 bcrypt 해시로 변환
    ///
    /// # Errors
    ///
    /// * `AppError::CryptoError` - 해싱 실패
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        hash(password, self.cost)
            .map_err(|e| AppError::CryptoError(format!("비밀번호 해싱 실패: {}", e)))
    }

    /// 평문 비밀번호와 저장된 해시 비교
    ///
    /// 비밀번호 불일치는 `Ok(false)`입니다. 에러는 해시 자체가
    /// 손상된 경우에만 발생합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::CryptoError` - 잘못된 해시 형식
    pub fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, AppError> {
        verify(password, hashed)
            .map_err(|e| AppError::CryptoError(format!("비밀번호 검증 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 테스트는 최소 cost로 실행 시간을 줄인다
    fn service() -> PasswordService {
        PasswordService::new(4)
    }

    #[test]
    fn test_hash_and_verify_correct_password() {
        let svc = service();
        let hashed = svc.hash_password("hunter2password").unwrap();

        assert_ne!(hashed, "hunter2password");
        assert!(svc.verify_password("hunter2password", &hashed).unwrap());
    }

    #[test]
    fn test_wrong_password_returns_false_not_error() {
        let svc = service();
        let hashed = svc.hash_password("hunter2password").unwrap();

        assert!(!svc.verify_password("wrong-password", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let svc = service();
        let first = svc.hash_password("hunter2password").unwrap();
        let second = svc.hash_password("hunter2password").unwrap();

        // salt가 매번 달라야 한다
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_crypto_error() {
        let svc = service();
        let result = svc.verify_password("hunter2password", "not-a-bcrypt-hash");

        assert!(matches!(result, Err(AppError::CryptoError(_))));
    }
}
