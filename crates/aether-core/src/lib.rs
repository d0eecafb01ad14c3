//! # aether-core
//!
//! 로컬 UI 설정 상태 컨테이너.
//! 설정 트리, 경로 주소 지정, 리듀서, 필드 의존성 평가기를 제공한다.
//!
//! ## 구조
//!
//! - [`models`]: 설정 트리/값/경로, 필드 디스크립터
//! - [`defaults`]: 기본 설정 트리
//! - [`reducer`]: hydrate / change / delete 순수 상태 전이
//! - [`evaluator`]: `depends_on` / `depends_on_not` 활성화 술어
//! - [`store`]: 단일 트리를 소유하는 dispatch 레이어
//! - [`ports`]: 영속 저장소 포트 (trait)
//! - [`error`]: 핵심 에러 타입 (thiserror)
//! - [`config`]: 애플리케이션 설정 구조체

pub mod config;
pub mod defaults;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod ports;
pub mod reducer;
pub mod store;

pub use error::CoreError;
pub use models::{ControlKind, FieldDescriptor, FieldOption, PrefPath, PrefValue, PreferenceTree};
pub use reducer::Action;

#[cfg(test)]
mod tests {
    use crate::defaults::default_tree;
    use crate::models::PrefPath;
    use crate::reducer::Action;

    #[test]
    fn persisted_layout_roundtrip() {
        let tree = default_tree();
        let json = serde_json::to_string(&tree).unwrap();
        let back: crate::PreferenceTree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn action_roundtrip_through_json() {
        let action = Action::change(["collapsed", "auto", "height"], 1800);
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(Action::from_json(&json).unwrap(), action);
        assert_eq!(
            json["path"],
            serde_json::to_value(PrefPath::from(["collapsed", "auto", "height"])).unwrap()
        );
    }
}
