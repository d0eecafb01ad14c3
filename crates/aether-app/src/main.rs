//! # aether-app
//!
//! Aether 로컬 설정 CLI 진입점.
//! 저장소 어댑터를 고르고 설정 스토어를 열어 하위 명령을 실행한다.

mod commands;
mod paths;
mod render;

use aether_core::config::AppConfig;
use aether_core::ports::storage::PreferenceStorage;
use aether_core::store::SettingsStore;
use aether_storage::{JsonFileStorage, MemoryStorage};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Aether 로컬 설정 관리
///
/// 브라우저 로컬 UI 설정을 조회/변경하고 설정 페이지를 미리 본다.
#[derive(Parser, Debug)]
#[command(name = "aether")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 저장 디렉토리 (기본: 플랫폼 데이터 디렉토리)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// 파일에 저장하지 않고 인메모리로만 실행
    #[arg(long, global = true)]
    ephemeral: bool,

    /// 애플리케이션 설정 파일 (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 전체 설정 출력
    Show {
        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 경로의 값 출력 (예: collapsed.auto.height)
    Get { path: String },
    /// 경로에 값 쓰기. 값은 JSON, 파싱 실패 시 문자열로 취급
    Set {
        path: String,
        value: String,
        /// 필드 검증(선택지, 범위, 활성화 여부) 생략
        #[arg(long)]
        raw: bool,
    },
    /// 경로의 값 제거
    Delete { path: String },
    /// JSON 파일을 현재 설정 위에 병합하고 저장
    Hydrate { file: PathBuf },
    /// 설정 페이지 목록
    Pages,
    /// 설정 페이지 미리보기 (범위 밖 인덱스는 첫 페이지)
    Page {
        #[arg(allow_hyphen_values = true)]
        index: i64,
        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 경로에 묶인 필드의 활성화 여부
    Check { path: String },
}

/// 애플리케이션 설정 로드 (파일이 없으면 기본값)
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("설정 파일 읽기 실패: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("설정 파일 파싱 실패: {}", path.display()))?
        }
        None => AppConfig::default_config(),
    };

    paths::apply_overrides(
        &mut config,
        args.data_dir.clone(),
        std::env::var_os(paths::DATA_DIR_ENV),
    );
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

fn init_tracing(level: &str) {
    let log_filter = format!(
        "aether={level},aether_app={level},aether_core={level},aether_settings={level},aether_storage={level}"
    );
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();
}

fn open_storage(config: &AppConfig, ephemeral: bool) -> Arc<dyn PreferenceStorage> {
    if ephemeral {
        info!("인메모리 저장소 사용");
        return Arc::new(MemoryStorage::new());
    }

    let path = paths::resolve_settings_path(config);
    debug!("설정 파일 경로: {}", path.display());
    Arc::new(JsonFileStorage::new(path).with_pretty(config.storage.pretty))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    init_tracing(&config.logging.level);

    let store = SettingsStore::open(open_storage(&config, args.ephemeral));
    info!("설정 스토어 준비: {}", store.storage_location());

    commands::run(&store, args.command)
}
