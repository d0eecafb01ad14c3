//! 설정 영속 저장소 포트.
//!
//! 구현: `aether-storage` crate (JSON 파일, 인메모리)

use serde_json::Value;

use crate::error::CoreError;

/// 직렬화된 설정 트리 blob 저장소
///
/// blob은 기본 트리와 같은 키/중첩 구조의 JSON 객체다.
pub trait PreferenceStorage: Send + Sync {
    /// 저장된 blob 로드. 저장된 적이 없으면 `Ok(None)`.
    fn load(&self) -> Result<Option<Value>, CoreError>;

    /// blob 저장 (전체 교체)
    fn save(&self, blob: &Value) -> Result<(), CoreError>;

    /// 로그/진단용 위치 설명
    fn describe(&self) -> String;
}
