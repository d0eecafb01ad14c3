//! 인메모리 저장소.

use aether_core::error::CoreError;
use aether_core::ports::storage::PreferenceStorage;
use parking_lot::Mutex;
use serde_json::Value;

/// 프로세스 로컬 저장소 (세션 종료 시 사라짐)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: Mutex<Option<Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 미리 저장된 blob으로 생성
    pub fn with_blob(blob: Value) -> Self {
        Self {
            blob: Mutex::new(Some(blob)),
        }
    }

    /// 마지막으로 저장된 blob
    pub fn snapshot(&self) -> Option<Value> {
        self.blob.lock().clone()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Value>, CoreError> {
        Ok(self.blob.lock().clone())
    }

    fn save(&self, blob: &Value) -> Result<(), CoreError> {
        *self.blob.lock() = Some(blob.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
