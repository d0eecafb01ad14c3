//! 애플리케이션 설정 구조체.
//!
//! 로컬 설정 파일 위치와 로그 레벨. 사용자 UI 설정(설정 트리)과는 별개로,
//! 바이너리가 저장소를 어디에 둘지 결정하는 런타임 설정이다.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// 허용되는 로그 레벨
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 저장소 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 데이터 디렉토리 오버라이드 (없으면 플랫폼 기본 경로)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// 설정 파일 이름
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// 사람이 읽기 쉬운 JSON으로 저장
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            file_name: default_file_name(),
            pretty: true,
        }
    }
}

/// 로깅 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_file_name() -> String {
    "local_settings.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// 기본 설정
    pub fn default_config() -> Self {
        Self::default()
    }

    /// 설정 파일 전체 경로. `data_dir`이 없으면 `fallback_dir` 사용.
    pub fn settings_path(&self, fallback_dir: &Path) -> PathBuf {
        self.storage
            .data_dir
            .as_deref()
            .unwrap_or(fallback_dir)
            .join(&self.storage.file_name)
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        let name = &self.storage.file_name;
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(CoreError::Config(format!("잘못된 설정 파일 이름: {name:?}")));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(CoreError::Config(format!(
                "알 수 없는 로그 레벨: {} (허용: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
