//! 표준 설정 페이지 빌더.
//!
//! 순서가 곧 페이지 인덱스다.

pub mod accessibility;
pub mod compose;
pub mod general;
pub mod layout;
pub mod posts;

use aether_core::models::{FieldDescriptor, FieldOption, PrefPath};

/// 필드 ID 접두사
pub const FIELD_ID_PREFIX: &str = "aether-settings--";

/// 경로에서 필드 ID 생성 (`collapsed.auto.height` → `aether-settings--collapsed-auto-height`)
pub fn field_id(path: &PrefPath) -> String {
    format!("{FIELD_ID_PREFIX}{}", path.keys().join("-"))
}

pub(crate) fn toggle(path: &[&str]) -> FieldDescriptor {
    let path = PrefPath::from(path);
    FieldDescriptor::toggle(field_id(&path), path)
}

pub(crate) fn radio(path: &[&str], options: Vec<FieldOption>) -> FieldDescriptor {
    let path = PrefPath::from(path);
    FieldDescriptor::radio(field_id(&path), path, options)
}

/// 가시성(공개 범위) 선택지
pub(crate) fn privacy_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new("direct", "Mentioned people only"),
        FieldOption::new("private", "Followers only"),
        FieldOption::new("unlisted", "Unlisted"),
        FieldOption::new("public", "Public"),
    ]
}
