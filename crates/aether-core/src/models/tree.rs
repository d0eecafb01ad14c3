//! 설정 트리.
//!
//! `im::OrdMap` 기반 영속(persistent) 자료구조. 모든 변경 연산은 새 버전을
//! 반환하고, 바뀌지 않은 하위 트리는 이전 버전과 구조를 공유한다.
//! 원본 트리는 절대 수정되지 않는다.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::path::PrefPath;
use super::value::PrefValue;
use crate::error::CoreError;

/// 중첩 설정 트리
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceTree(OrdMap<String, PrefValue>);

impl PreferenceTree {
    pub fn new() -> Self {
        Self(OrdMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&PrefValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PrefValue)> {
        self.0.iter()
    }

    /// 키 하나를 설정한 새 트리 (빌더용)
    pub fn with(&self, key: impl Into<String>, value: impl Into<PrefValue>) -> Self {
        Self(self.0.update(key.into(), value.into()))
    }

    /// 경로의 값 조회. 빈 경로이거나 중간에 스칼라를 만나면 `None`.
    pub fn get_in(&self, path: &PrefPath) -> Option<&PrefValue> {
        let (first, rest) = path.keys().split_first()?;
        let mut current = self.0.get(first)?;
        for key in rest {
            current = current.as_tree()?.0.get(key)?;
        }
        Some(current)
    }

    /// 경로 값의 truthiness. 없는 경로는 falsy.
    pub fn is_truthy_at(&self, path: &PrefPath) -> bool {
        self.get_in(path).is_some_and(PrefValue::is_truthy)
    }

    /// 경로에 값을 쓴 새 트리.
    ///
    /// 없는 중간 노드는 빈 트리로 생성한다. 기존 중간 노드가 스칼라이면
    /// `InvalidPath`.
    pub fn set_in(&self, path: &PrefPath, value: PrefValue) -> Result<Self, CoreError> {
        if path.is_empty() {
            return Err(CoreError::invalid_path(path, "리프 쓰기에 빈 경로"));
        }
        set_at(&self.0, path.keys(), value, path).map(Self)
    }

    /// 경로의 값을 제거한 새 트리.
    ///
    /// 없는 경로는 변경 없음. 비게 된 부모 트리는 정리하지 않는다.
    pub fn remove_in(&self, path: &PrefPath) -> Result<Self, CoreError> {
        if path.is_empty() {
            return Err(CoreError::invalid_path(path, "삭제에 빈 경로"));
        }
        Ok(match remove_at(&self.0, path.keys(), path)? {
            Some(updated) => Self(updated),
            None => self.clone(),
        })
    }

    /// 깊은 병합.
    ///
    /// 양쪽이 모두 하위 트리인 키만 재귀 병합하고, 나머지는 `overlay` 값으로
    /// 통째로 교체한다. `overlay`에 없는 키는 그대로 유지된다.
    pub fn merge_deep(&self, overlay: &PreferenceTree) -> PreferenceTree {
        let mut merged = self.0.clone();
        for (key, incoming) in overlay.0.iter() {
            let next = match (merged.get(key), incoming) {
                (Some(PrefValue::Tree(base)), PrefValue::Tree(inc)) => {
                    PrefValue::Tree(base.merge_deep(inc))
                }
                _ => incoming.clone(),
            };
            merged.insert(key.clone(), next);
        }
        PreferenceTree(merged)
    }

    /// 모든 리프 경로 (빈 하위 트리도 리프로 취급)
    pub fn leaf_paths(&self) -> Vec<PrefPath> {
        let mut out = Vec::new();
        collect_leaves(self, &PrefPath::root(), &mut out);
        out
    }

    /// JSON 객체에서 관대하게 변환.
    ///
    /// `null`은 빈 트리. 객체가 아니면 `InvalidArgument`. 배열 값은 건너뛰고
    /// 건너뛴 경로 목록을 함께 반환한다.
    pub fn from_json_lossy(value: &Value) -> Result<(Self, Vec<PrefPath>), CoreError> {
        match value {
            Value::Null => Ok((Self::new(), Vec::new())),
            Value::Object(map) => {
                let mut skipped = Vec::new();
                let tree = Self::from_json_object(map, &PrefPath::root(), &mut skipped);
                Ok((tree, skipped))
            }
            other => Err(CoreError::InvalidArgument(format!(
                "설정 트리는 JSON 객체여야 함: {other}"
            ))),
        }
    }

    pub(crate) fn from_json_object(
        map: &Map<String, Value>,
        at: &PrefPath,
        skipped: &mut Vec<PrefPath>,
    ) -> Self {
        let mut out = OrdMap::new();
        for (key, value) in map {
            let here = at.child(key.as_str());
            if let Some(converted) = PrefValue::from_json_lossy(value, &here, skipped) {
                out.insert(key.clone(), converted);
            }
        }
        Self(out)
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

fn set_at(
    map: &OrdMap<String, PrefValue>,
    keys: &[String],
    value: PrefValue,
    full: &PrefPath,
) -> Result<OrdMap<String, PrefValue>, CoreError> {
    let Some((head, rest)) = keys.split_first() else {
        return Ok(map.clone());
    };

    if rest.is_empty() {
        return Ok(map.update(head.clone(), value));
    }

    let child = match map.get(head) {
        None => OrdMap::new(),
        Some(PrefValue::Tree(t)) => t.0.clone(),
        Some(other) => {
            return Err(CoreError::invalid_path(
                full,
                format!("'{head}'는 {} 값이라 하위로 내려갈 수 없음", other.kind_name()),
            ))
        }
    };

    let updated = set_at(&child, rest, value, full)?;
    Ok(map.update(head.clone(), PrefValue::Tree(PreferenceTree(updated))))
}

/// `None`이면 변경 없음
fn remove_at(
    map: &OrdMap<String, PrefValue>,
    keys: &[String],
    full: &PrefPath,
) -> Result<Option<OrdMap<String, PrefValue>>, CoreError> {
    let Some((head, rest)) = keys.split_first() else {
        return Ok(None);
    };

    if rest.is_empty() {
        return Ok(map.contains_key(head).then(|| map.without(head)));
    }

    match map.get(head) {
        None => Ok(None),
        Some(PrefValue::Tree(t)) => Ok(remove_at(&t.0, rest, full)?
            .map(|child| map.update(head.clone(), PrefValue::Tree(PreferenceTree(child))))),
        Some(other) => Err(CoreError::invalid_path(
            full,
            format!("'{head}'는 {} 값이라 하위로 내려갈 수 없음", other.kind_name()),
        )),
    }
}

fn collect_leaves(tree: &PreferenceTree, at: &PrefPath, out: &mut Vec<PrefPath>) {
    for (key, value) in tree.iter() {
        let here = at.child(key.as_str());
        match value {
            PrefValue::Tree(sub) if !sub.is_empty() => collect_leaves(sub, &here, out),
            _ => out.push(here),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn sample() -> PreferenceTree {
        let (tree, _) = PreferenceTree::from_json_lossy(&json!({
            "theme": "auto",
            "collapsed": {
                "enabled": true,
                "auto": { "all": false, "height": 1400 }
            }
        }))
        .unwrap();
        tree
    }

    #[test]
    fn get_in_nested() {
        let tree = sample();
        let height = tree.get_in(&PrefPath::from(["collapsed", "auto", "height"]));
        assert_eq!(height, Some(&PrefValue::from(1400)));
        assert!(tree.get_in(&PrefPath::from(["theme", "x"])).is_none());
        assert!(tree.get_in(&PrefPath::root()).is_none());
    }

    #[test]
    fn set_in_creates_intermediates() {
        let tree = PreferenceTree::new();
        let path = PrefPath::from(["right_column", "widgets", "lists"]);
        let updated = tree.set_in(&path, true.into()).unwrap();

        assert_eq!(updated.get_in(&path), Some(&PrefValue::Bool(true)));
        assert!(tree.is_empty());
    }

    #[test]
    fn set_in_through_scalar_fails() {
        let tree = sample();
        let err = tree
            .set_in(&PrefPath::from(["theme", "dark"]), true.into())
            .unwrap_err();
        assert_matches!(err, CoreError::InvalidPath { .. });
    }

    #[test]
    fn set_in_empty_path_fails() {
        let err = sample().set_in(&PrefPath::root(), true.into()).unwrap_err();
        assert_matches!(err, CoreError::InvalidPath { .. });
    }

    #[test]
    fn remove_in_keeps_empty_parent() {
        let tree = PreferenceTree::new()
            .set_in(&PrefPath::from(["media", "letterbox"]), true.into())
            .unwrap();
        let removed = tree.remove_in(&PrefPath::from(["media", "letterbox"])).unwrap();

        let media = removed.get("media").and_then(PrefValue::as_tree).unwrap();
        assert!(media.is_empty());
    }

    #[test]
    fn remove_in_missing_is_noop() {
        let tree = sample();
        let same = tree.remove_in(&PrefPath::from(["nope", "deeper"])).unwrap();
        assert_eq!(same, tree);
    }

    #[test]
    fn remove_in_through_scalar_fails() {
        let tree = sample();
        let err = tree.remove_in(&PrefPath::from(["theme", "x"])).unwrap_err();
        assert_matches!(err, CoreError::InvalidPath { .. });

        let err = tree
            .remove_in(&PrefPath::from(["collapsed", "enabled", "x"]))
            .unwrap_err();
        assert_matches!(err, CoreError::InvalidPath { .. });
    }

    #[test]
    fn remove_in_empty_path_fails() {
        let err = sample().remove_in(&PrefPath::root()).unwrap_err();
        assert_matches!(err, CoreError::InvalidPath { .. });
    }

    #[test]
    fn merge_deep_replaces_scalars_and_recurses() {
        let base = sample();
        let (overlay, _) = PreferenceTree::from_json_lossy(&json!({
            "theme": "dark",
            "collapsed": { "auto": { "all": true } }
        }))
        .unwrap();

        let merged = base.merge_deep(&overlay);
        assert_eq!(merged.get("theme"), Some(&PrefValue::from("dark")));
        assert!(merged.is_truthy_at(&PrefPath::from(["collapsed", "auto", "all"])));
        assert_eq!(
            merged.get_in(&PrefPath::from(["collapsed", "auto", "height"])),
            Some(&PrefValue::from(1400))
        );
        assert!(merged.is_truthy_at(&PrefPath::from(["collapsed", "enabled"])));
    }

    #[test]
    fn merge_deep_scalar_over_tree_replaces_whole() {
        let base = sample();
        let overlay = PreferenceTree::new().with("collapsed", false);
        let merged = base.merge_deep(&overlay);
        assert_eq!(merged.get("collapsed"), Some(&PrefValue::Bool(false)));
    }

    #[test]
    fn from_json_lossy_rejects_non_object() {
        assert_matches!(
            PreferenceTree::from_json_lossy(&json!(42)),
            Err(CoreError::InvalidArgument(_))
        );
        let (empty, skipped) = PreferenceTree::from_json_lossy(&Value::Null).unwrap();
        assert!(empty.is_empty());
        assert!(skipped.is_empty());
    }

    #[test]
    fn json_roundtrip_preserves_shape() {
        let tree = sample();
        let json = tree.to_json();
        let (back, skipped) = PreferenceTree::from_json_lossy(&json).unwrap();
        assert!(skipped.is_empty());
        assert_eq!(back, tree);
    }

    #[test]
    fn leaf_paths_lists_scalars() {
        let paths = sample().leaf_paths();
        assert!(paths.contains(&PrefPath::from(["collapsed", "auto", "height"])));
        assert!(paths.contains(&PrefPath::from(["theme"])));
        assert_eq!(paths.len(), 4);
    }
}
