//! 로컬 설정 핵심 에러 타입.
//!
//! 어댑터 crate는 자체 에러를 만들지 않고 `CoreError`를 그대로 반환한다.
//! 바이너리(`aether-app`)에서만 `anyhow`로 감싼다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 경로, 액션 페이로드, 값 검증, 저장소 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 경로가 스칼라 값을 통과하거나, 리프 쓰기에 빈 경로가 주어짐
    #[error("잘못된 경로 [{path}]: {reason}")]
    InvalidPath {
        /// 문제가 된 경로 (점 표기)
        path: String,
        /// 실패 사유
        reason: String,
    },

    /// 잘못된 액션 페이로드 (배열이 아닌 경로, 알 수 없는 kind 등)
    #[error("잘못된 인자: {0}")]
    InvalidArgument(String),

    /// 설정 화면 필드 값 검증 실패
    #[error("유효성 검증 실패 [{field}]: {message}")]
    Validation {
        /// 검증 실패한 필드 ID
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 영속 저장소 에러
    #[error("저장소 에러: {0}")]
    Storage(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),
}

impl CoreError {
    /// 경로 에러 생성 헬퍼
    pub fn invalid_path(path: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
