//! # aether-storage
//!
//! 로컬 설정 저장소 어댑터.
//! `aether_core::ports::storage::PreferenceStorage` 구현체를 제공한다.
//!
//! ## 모듈
//! - `json_file`: 플랫폼 데이터 디렉토리의 JSON 파일
//! - `memory`: 프로세스 로컬 저장소 (테스트, `--ephemeral`)

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
