//! 설정 도메인 모델.
//!
//! 트리/값/경로와 설정 화면 필드 디스크립터.

pub mod field;
pub mod path;
pub mod tree;
pub mod value;

pub use field::{ControlKind, FieldDescriptor, FieldOption};
pub use path::PrefPath;
pub use tree::PreferenceTree;
pub use value::PrefValue;
