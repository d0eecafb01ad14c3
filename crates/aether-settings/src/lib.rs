//! # aether-settings
//!
//! 로컬 설정 화면 페이지 빌더와 레지스트리.
//! 각 페이지는 현재 설정 트리와 변경 콜백을 받아 필드 디스크립터와
//! 렌더링 힌트(라벨, 선택지, 활성화 여부)를 만든다. 실제 화면 그리기는
//! 소비자(CLI, GUI)의 몫이다.
//!
//! ## 모듈
//! - `page`: 페이지/구역/필드 뷰 모델
//! - `pages`: 표준 페이지 빌더 (일반, 레이아웃, 작성 상자, 게시물, 접근성)
//! - `registry`: 인덱스 기반 페이지 선택 (범위 밖 → 첫 페이지)

pub mod page;
pub mod pages;
pub mod registry;

pub use page::{ChangeHandler, FieldView, PageContext, PageSection, SettingsPage};
pub use registry::{PageBuilder, PageEntry, SettingsRegistry};
