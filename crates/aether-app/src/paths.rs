//! 설정 파일 경로 결정.
//!
//! 우선순위: `--data-dir` > `AETHER_DATA_DIR` > 설정 파일의 `storage.data_dir`
//! > 플랫폼 기본 경로.
//!
//! # 플랫폼별 기본 경로
//! - macOS: `~/Library/Application Support/org.aether.aether/local_settings.json`
//! - Windows: `%APPDATA%\aether\aether\data\local_settings.json`
//! - Linux: `~/.local/share/aether/local_settings.json`

use aether_core::config::AppConfig;
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;

/// 데이터 디렉토리 환경 변수
pub const DATA_DIR_ENV: &str = "AETHER_DATA_DIR";

/// CLI 인자와 환경 변수를 설정에 반영
pub fn apply_overrides(config: &mut AppConfig, cli_dir: Option<PathBuf>, env_dir: Option<OsString>) {
    let env_dir = env_dir.filter(|v| !v.is_empty()).map(PathBuf::from);
    if let Some(dir) = cli_dir.or(env_dir) {
        config.storage.data_dir = Some(dir);
    }
}

/// 플랫폼 기본 데이터 디렉토리
pub fn platform_data_dir() -> PathBuf {
    ProjectDirs::from("org", "aether", "aether")
        .map(|p| p.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// 최종 설정 파일 경로
pub fn resolve_settings_path(config: &AppConfig) -> PathBuf {
    config.settings_path(&platform_data_dir())
}
