//! JSON 파일 저장소.
//!
//! 설정 트리 blob을 JSON 파일 하나로 저장/로드한다.

use aether_core::error::CoreError;
use aether_core::ports::storage::PreferenceStorage;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// JSON 파일 저장소
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    /// 설정 파일 경로
    path: PathBuf,
    /// 들여쓰기 저장 여부
    pretty: bool,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// `false`면 한 줄 JSON으로 저장
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// 설정 파일 경로 반환
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CoreError::Storage(format!(
                        "설정 디렉토리 생성 실패: {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
                info!("설정 디렉토리 생성: {}", parent.display());
            }
        }
        Ok(())
    }
}

impl PreferenceStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Value>, CoreError> {
        if !self.path.exists() {
            debug!("설정 파일 없음: {}", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            CoreError::Storage(format!("설정 파일 읽기 실패: {}: {}", self.path.display(), e))
        })?;

        let blob: Value = serde_json::from_str(&content).map_err(|e| {
            CoreError::Storage(format!("설정 파일 파싱 실패: {}: {}", self.path.display(), e))
        })?;

        debug!("설정 파일 로드 완료: {}", self.path.display());
        Ok(Some(blob))
    }

    fn save(&self, blob: &Value) -> Result<(), CoreError> {
        self.ensure_parent_dir()?;

        let content = if self.pretty {
            serde_json::to_string_pretty(blob)?
        } else {
            serde_json::to_string(blob)?
        };

        fs::write(&self.path, content).map_err(|e| {
            CoreError::Storage(format!("설정 파일 저장 실패: {}: {}", self.path.display(), e))
        })?;

        debug!("설정 파일 저장 완료: {}", self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
