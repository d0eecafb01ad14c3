//! 리듀서 속성 기반 테스트.
//!
//! 1. hydrate 멱등성: `hydrate(hydrate(T, X), X) == hydrate(T, X)`
//! 2. 병합 정확성: X의 스칼라 리프는 X 값, X가 건드리지 않은 T의 리프는 T 값
//! 3. 경로 왕복: `change(T, P, V)` 후 `P`를 읽으면 `V`
//! 4. 삭제는 형제를 보존: `P`로 시작하지 않는 경로의 값은 그대로

use aether_core::models::{PrefPath, PrefValue, PreferenceTree};
use aether_core::reducer::{change, delete, hydrate};
use aether_core::CoreError;
use proptest::prelude::*;
use std::collections::BTreeMap;

// ── 생성기 ───────────────────────────────────────────────────────────────

/// 충돌이 잘 나도록 작은 키 공간
fn arb_key() -> impl Strategy<Value = String> {
    "[a-c]{1,2}"
}

fn arb_scalar() -> impl Strategy<Value = PrefValue> {
    prop_oneof![
        Just(PrefValue::Null),
        any::<bool>().prop_map(PrefValue::from),
        any::<i32>().prop_map(PrefValue::from),
        "[a-z]{0,4}".prop_map(PrefValue::from),
    ]
}

fn tree_from(map: BTreeMap<String, PrefValue>) -> PreferenceTree {
    map.into_iter()
        .fold(PreferenceTree::new(), |tree, (k, v)| tree.with(k, v))
}

fn arb_value() -> impl Strategy<Value = PrefValue> {
    arb_scalar().prop_recursive(3, 32, 4, |inner| {
        prop::collection::btree_map(arb_key(), inner, 0..4)
            .prop_map(|m| PrefValue::Tree(tree_from(m)))
    })
}

fn arb_tree() -> impl Strategy<Value = PreferenceTree> {
    prop::collection::btree_map(arb_key(), arb_value(), 0..5).prop_map(tree_from)
}

fn arb_path() -> impl Strategy<Value = PrefPath> {
    prop::collection::vec(arb_key(), 1..4).prop_map(PrefPath::new)
}

fn prefix(path: &PrefPath, len: usize) -> PrefPath {
    PrefPath::new(path.keys()[..len].iter().cloned())
}

/// 경로의 어떤 접두사(자기 자신 포함)에서 X가 스칼라를 갖는지
fn overlay_touches(overlay: &PreferenceTree, path: &PrefPath) -> bool {
    (1..=path.len()).any(|n| {
        overlay
            .get_in(&prefix(path, n))
            .is_some_and(|v| v.as_tree().is_none())
    }) || overlay.get_in(path).is_some()
}

/// 경로의 진접두사 중 하나가 스칼라인지
fn blocked_by_scalar(tree: &PreferenceTree, path: &PrefPath) -> bool {
    (1..path.len()).any(|n| {
        tree.get_in(&prefix(path, n))
            .is_some_and(|v| v.as_tree().is_none())
    })
}

// ── 속성 ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn hydrate_is_idempotent(base in arb_tree(), overlay in arb_tree()) {
        let once = hydrate(&base, &overlay);
        let twice = hydrate(&once, &overlay);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn hydrate_sets_overlay_scalars(base in arb_tree(), overlay in arb_tree()) {
        let merged = hydrate(&base, &overlay);
        for path in overlay.leaf_paths() {
            let expected = overlay.get_in(&path).unwrap();
            if expected.as_tree().is_none() {
                prop_assert_eq!(merged.get_in(&path), Some(expected), "path {}", path);
            }
        }
    }

    #[test]
    fn hydrate_retains_untouched_leaves(base in arb_tree(), overlay in arb_tree()) {
        let merged = hydrate(&base, &overlay);
        for path in base.leaf_paths() {
            if !overlay_touches(&overlay, &path) {
                prop_assert_eq!(merged.get_in(&path), base.get_in(&path), "path {}", path);
            }
        }
    }

    #[test]
    fn change_then_read_returns_value(
        base in arb_tree(),
        path in arb_path(),
        value in arb_value(),
    ) {
        match change(&base, &path, value.clone()) {
            Ok(updated) => prop_assert_eq!(updated.get_in(&path), Some(&value)),
            Err(CoreError::InvalidPath { .. }) => {
                // 어떤 상위 노드가 스칼라여야만 실패한다
                prop_assert!(blocked_by_scalar(&base, &path), "unexpected InvalidPath for {}", path);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn delete_preserves_other_paths(base in arb_tree(), path in arb_path()) {
        match delete(&base, &path) {
            Ok(deleted) => {
                prop_assert!(deleted.get_in(&path).is_none());
                for leaf in base.leaf_paths() {
                    if !leaf.starts_with(&path) {
                        prop_assert_eq!(deleted.get_in(&leaf), base.get_in(&leaf), "leaf {}", leaf);
                    }
                }
            }
            Err(CoreError::InvalidPath { .. }) => {
                // 어떤 상위 노드가 스칼라여야만 실패한다
                prop_assert!(blocked_by_scalar(&base, &path), "unexpected InvalidPath for {}", path);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn operations_never_mutate_input(base in arb_tree(), path in arb_path(), value in arb_value()) {
        let before = base.clone();
        let _ = change(&base, &path, value);
        let _ = delete(&base, &path);
        let _ = hydrate(&base, &before);
        prop_assert_eq!(base, before);
    }
}
