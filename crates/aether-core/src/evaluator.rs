//! 필드 의존성 평가기.
//!
//! 현재 트리와 필드의 정적 디스크립터만으로 활성화 여부를 결정하는 순수 술어.
//! `depends_on`은 모두 truthy, `depends_on_not`은 모두 falsy여야 하며
//! 두 조건은 AND로 결합된다. 두 목록이 모두 비면 항상 활성화.

use crate::models::{FieldDescriptor, PreferenceTree};

/// 필드 활성화 여부
pub fn is_enabled(tree: &PreferenceTree, descriptor: &FieldDescriptor) -> bool {
    descriptor
        .depends_on
        .iter()
        .all(|path| tree.is_truthy_at(path))
        && descriptor
            .depends_on_not
            .iter()
            .all(|path| !tree.is_truthy_at(path))
}

/// 활성화된 필드만 남긴 목록 (순서 유지)
pub fn enabled_fields<'a>(
    tree: &PreferenceTree,
    descriptors: &'a [FieldDescriptor],
) -> Vec<&'a FieldDescriptor> {
    descriptors
        .iter()
        .filter(|d| is_enabled(tree, d))
        .collect()
}
