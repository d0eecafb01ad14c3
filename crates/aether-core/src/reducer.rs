//! 로컬 설정 리듀서.
//!
//! 순수 상태 전이 함수. 입력 트리는 수정하지 않고 항상 새 버전을 반환한다.
//!
//! | 액션 | 동작 |
//! |------|------|
//! | `Hydrate` | 저장된 설정을 기본 트리 위에 깊은 병합 |
//! | `Change` | 경로에 값 쓰기 (중간 노드 생성) |
//! | `Delete` | 경로의 값 제거 (빈 부모는 유지) |

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::models::{PrefPath, PrefValue, PreferenceTree};

/// 저장소 상태 blob에서 로컬 설정이 들어 있는 키
pub const STORE_STATE_KEY: &str = "local_settings";

/// 리듀서 액션
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    Hydrate { state: PreferenceTree },
    Change { path: PrefPath, value: PrefValue },
    Delete { path: PrefPath },
}

impl Action {
    pub fn change(path: impl Into<PrefPath>, value: impl Into<PrefValue>) -> Self {
        Action::Change {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn delete(path: impl Into<PrefPath>) -> Self {
        Action::Delete { path: path.into() }
    }

    /// 액션 이름 (로그용)
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Hydrate { .. } => "hydrate",
            Action::Change { .. } => "change",
            Action::Delete { .. } => "delete",
        }
    }

    /// 외부 JSON 페이로드에서 액션 디코드.
    ///
    /// 형식이 잘못되면 `InvalidArgument`. hydrate 상태 안의 표현할 수 없는
    /// 값(배열)은 건너뛰고 경고만 남긴다.
    pub fn from_json(payload: &Value) -> Result<Self, CoreError> {
        let obj = payload.as_object().ok_or_else(|| {
            CoreError::InvalidArgument(format!("액션은 JSON 객체여야 함: {payload}"))
        })?;

        let kind = obj
            .get("kind")
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::InvalidArgument("액션에 kind 문자열이 없음".to_string()))?;

        match kind {
            "hydrate" => {
                let state = obj.get("state").unwrap_or(&Value::Null);
                let (state, skipped) = PreferenceTree::from_json_lossy(state)?;
                log_skipped(&skipped);
                Ok(Action::Hydrate { state })
            }
            "change" => {
                let path = PrefPath::from_json(required(obj, "path")?)?;
                let value = PrefValue::from_json(required(obj, "value")?)?;
                Ok(Action::Change { path, value })
            }
            "delete" => {
                let path = PrefPath::from_json(required(obj, "path")?)?;
                Ok(Action::Delete { path })
            }
            other => Err(CoreError::InvalidArgument(format!(
                "알 수 없는 액션 kind: {other}"
            ))),
        }
    }
}

fn required<'a>(obj: &'a serde_json::Map<String, Value>, key: &str) -> Result<&'a Value, CoreError> {
    obj.get(key)
        .ok_or_else(|| CoreError::InvalidArgument(format!("액션에 '{key}' 필드가 없음")))
}

fn log_skipped(skipped: &[PrefPath]) {
    for path in skipped {
        warn!("표현할 수 없는 설정 값 건너뜀: {path}");
    }
}

/// 액션 하나를 적용한 새 트리
pub fn reduce(tree: &PreferenceTree, action: &Action) -> Result<PreferenceTree, CoreError> {
    debug!("리듀서 액션 적용: {}", action.kind());
    match action {
        Action::Hydrate { state } => Ok(hydrate(tree, state)),
        Action::Change { path, value } => change(tree, path, value.clone()),
        Action::Delete { path } => delete(tree, path),
    }
}

/// 저장된 설정을 깊은 병합
pub fn hydrate(tree: &PreferenceTree, incoming: &PreferenceTree) -> PreferenceTree {
    if incoming.is_empty() {
        return tree.clone();
    }
    debug!("설정 hydrate: 최상위 키 {}개", incoming.len());
    tree.merge_deep(incoming)
}

/// 저장된 blob을 설정 트리로 변환.
///
/// 전체 저장소 상태 blob(`local_settings` 키 포함)이면 그 값만, 아니면 blob
/// 전체를 설정 객체로 본다. 표현할 수 없는 값은 경고 후 건너뛰고 그 경로를
/// 함께 반환한다. 객체가 아니면 `InvalidArgument`.
pub fn decode_persisted(blob: &Value) -> Result<(PreferenceTree, Vec<PrefPath>), CoreError> {
    let local = blob.get(STORE_STATE_KEY).unwrap_or(blob);
    let (tree, skipped) = PreferenceTree::from_json_lossy(local)?;
    log_skipped(&skipped);
    Ok((tree, skipped))
}

/// 전체 저장소 상태 blob에서 `local_settings`만 꺼내 병합.
///
/// 해당 키가 없거나 `null`이면 변경 없음. 객체가 아니면 `InvalidArgument`.
pub fn hydrate_from_store(tree: &PreferenceTree, store_state: &Value) -> Result<PreferenceTree, CoreError> {
    if matches!(store_state.get(STORE_STATE_KEY), None | Some(Value::Null)) {
        debug!("저장소 상태에 {STORE_STATE_KEY} 없음, hydrate 생략");
        return Ok(tree.clone());
    }

    let (incoming, _) = decode_persisted(store_state)?;
    Ok(hydrate(tree, &incoming))
}

/// 경로에 값 쓰기
pub fn change(tree: &PreferenceTree, path: &PrefPath, value: PrefValue) -> Result<PreferenceTree, CoreError> {
    debug!("설정 변경: {path} = {}", value.to_json());
    tree.set_in(path, value)
}

/// 경로의 값 제거
pub fn delete(tree: &PreferenceTree, path: &PrefPath) -> Result<PreferenceTree, CoreError> {
    debug!("설정 삭제: {path}");
    tree.remove_in(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_tree;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn overlay(value: Value) -> PreferenceTree {
        PreferenceTree::from_json_lossy(&value).unwrap().0
    }

    #[test]
    fn change_then_hydrate_keeps_sibling_branch() {
        let tree = default_tree();
        let height = PrefPath::from(["collapsed", "auto", "height"]);

        let changed = change(&tree, &height, 1800.into()).unwrap();
        let hydrated = hydrate(&changed, &overlay(json!({"collapsed": {"enabled": false}})));

        assert_eq!(hydrated.get_in(&height), Some(&PrefValue::from(1800)));
        assert_eq!(
            hydrated.get_in(&PrefPath::from(["collapsed", "enabled"])),
            Some(&PrefValue::Bool(false))
        );
    }

    #[test]
    fn operations_leave_input_untouched() {
        let tree = default_tree();
        let before = tree.clone();

        let _ = change(&tree, &PrefPath::from(["theme"]), "dark".into()).unwrap();
        let _ = delete(&tree, &PrefPath::from(["media", "letterbox"])).unwrap();
        let _ = hydrate(&tree, &overlay(json!({"stretch": false})));

        assert_eq!(tree, before);
    }

    #[test]
    fn hydrate_preserves_unknown_keys() {
        let tree = default_tree();
        let hydrated = hydrate(&tree, &overlay(json!({"future_setting": {"x": 1}})));
        assert!(hydrated.is_truthy_at(&PrefPath::from(["future_setting", "x"])));
        assert_eq!(hydrated.len(), tree.len() + 1);
    }

    #[test]
    fn hydrate_empty_overlay_is_identity() {
        let tree = default_tree();
        assert_eq!(hydrate(&tree, &PreferenceTree::new()), tree);
    }

    #[test]
    fn hydrate_from_store_extracts_local_settings() {
        let tree = default_tree();
        let state = json!({
            "meta": {"me": "1"},
            "local_settings": {"theme": "dark"}
        });
        let hydrated = hydrate_from_store(&tree, &state).unwrap();
        assert_eq!(hydrated.get("theme"), Some(&PrefValue::from("dark")));
        assert!(hydrated.get("meta").is_none());

        let untouched = hydrate_from_store(&tree, &json!({"meta": {}})).unwrap();
        assert_eq!(untouched, tree);
    }

    #[test]
    fn hydrate_from_store_skips_malformed_keys() {
        let tree = default_tree();
        let state = json!({"local_settings": {"theme": "light", "broken": [1, 2]}});
        let hydrated = hydrate_from_store(&tree, &state).unwrap();
        assert_eq!(hydrated.get("theme"), Some(&PrefValue::from("light")));
        assert!(hydrated.get("broken").is_none());
    }

    #[test]
    fn decode_persisted_accepts_both_shapes() {
        let (bare, skipped) = decode_persisted(&json!({"theme": "dark", "bad": [1]})).unwrap();
        assert_eq!(bare.get("theme"), Some(&PrefValue::from("dark")));
        assert_eq!(skipped, vec![PrefPath::from(["bad"])]);

        let (nested, skipped) = decode_persisted(&json!({
            "meta": {"me": "1"},
            "local_settings": {"stretch": false}
        }))
        .unwrap();
        assert!(skipped.is_empty());
        assert_eq!(nested.len(), 1);
        assert_eq!(nested.get("stretch"), Some(&PrefValue::from(false)));

        assert_matches!(
            decode_persisted(&json!("nope")),
            Err(CoreError::InvalidArgument(_))
        );
    }

    #[test]
    fn change_through_scalar_is_invalid_path() {
        let err = change(&default_tree(), &PrefPath::from(["theme", "x"]), true.into()).unwrap_err();
        assert_matches!(err, CoreError::InvalidPath { .. });
    }

    #[test]
    fn delete_keeps_siblings() {
        let tree = default_tree();
        let deleted = delete(&tree, &PrefPath::from(["collapsed", "auto", "height"])).unwrap();

        assert!(deleted
            .get_in(&PrefPath::from(["collapsed", "auto", "height"]))
            .is_none());
        assert_eq!(
            deleted.get_in(&PrefPath::from(["collapsed", "auto", "lengthy"])),
            tree.get_in(&PrefPath::from(["collapsed", "auto", "lengthy"]))
        );
    }

    #[test]
    fn reduce_dispatches_each_kind() {
        let tree = default_tree();
        let changed = reduce(&tree, &Action::change(["layout"], "advanced")).unwrap();
        assert_eq!(changed.get("layout"), Some(&PrefValue::from("advanced")));

        let deleted = reduce(&changed, &Action::delete(["layout"])).unwrap();
        assert!(deleted.get("layout").is_none());

        let hydrated = reduce(
            &deleted,
            &Action::Hydrate {
                state: overlay(json!({"layout": "normal"})),
            },
        )
        .unwrap();
        assert_eq!(hydrated, tree);
    }

    #[test]
    fn action_from_json_shapes() {
        let action = Action::from_json(&json!({
            "kind": "change",
            "path": ["collapsed", "auto", "height"],
            "value": 1800
        }))
        .unwrap();
        assert_eq!(action, Action::change(["collapsed", "auto", "height"], 1800));

        let action = Action::from_json(&json!({"kind": "delete", "path": ["theme"]})).unwrap();
        assert_eq!(action, Action::delete(["theme"]));

        let action = Action::from_json(&json!({"kind": "hydrate", "state": {"stretch": false}})).unwrap();
        assert_matches!(action, Action::Hydrate { ref state } if state.len() == 1);
    }

    #[test]
    fn action_from_json_rejects_malformed() {
        let cases = [
            json!("change"),
            json!({"path": ["theme"]}),
            json!({"kind": "rename", "path": ["theme"]}),
            json!({"kind": "change", "path": "theme", "value": 1}),
            json!({"kind": "change", "path": ["theme", 2], "value": 1}),
            json!({"kind": "change", "path": ["theme"]}),
            json!({"kind": "delete"}),
            json!({"kind": "hydrate", "state": 3}),
        ];
        for case in cases {
            assert_matches!(
                Action::from_json(&case),
                Err(CoreError::InvalidArgument(_)),
                "{case}"
            );
        }
    }

    #[test]
    fn action_serializes_with_kind_tag() {
        let json = serde_json::to_value(Action::delete(["media", "fullwidth"])).unwrap();
        assert_eq!(json, json!({"kind": "delete", "path": ["media", "fullwidth"]}));
    }
}
