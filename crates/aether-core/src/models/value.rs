//! 설정 값.
//!
//! 트리의 리프(null/bool/숫자/문자열) 또는 하위 트리.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::path::PrefPath;
use super::tree::PreferenceTree;
use crate::error::CoreError;

/// 설정 트리의 값
///
/// 숫자는 `serde_json::Number`를 그대로 보관하여 `1400`이 `1400.0`으로
/// 바뀌지 않고 왕복된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Tree(PreferenceTree),
}

impl PrefValue {
    /// 웹 클라이언트와 같은 truthiness 규칙
    ///
    /// `null`, `false`, `0`, `""`는 falsy. 하위 트리는 비어 있어도 truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            PrefValue::Null => false,
            PrefValue::Bool(b) => *b,
            PrefValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            PrefValue::String(s) => !s.is_empty(),
            PrefValue::Tree(_) => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PrefValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrefValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrefValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PrefValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&PreferenceTree> {
        match self {
            PrefValue::Tree(t) => Some(t),
            _ => None,
        }
    }

    /// 값 종류 이름 (로그/에러 메시지용)
    pub fn kind_name(&self) -> &'static str {
        match self {
            PrefValue::Null => "null",
            PrefValue::Bool(_) => "bool",
            PrefValue::Number(_) => "number",
            PrefValue::String(_) => "string",
            PrefValue::Tree(_) => "tree",
        }
    }

    /// JSON 값 엄격 변환. 배열이 어디든 있으면 `InvalidArgument`.
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        let mut skipped = Vec::new();
        let converted = Self::from_json_lossy(value, &PrefPath::root(), &mut skipped);
        match converted {
            Some(v) if skipped.is_empty() => Ok(v),
            _ => Err(CoreError::InvalidArgument(format!(
                "설정 값으로 표현할 수 없는 JSON (배열 불가): {value}"
            ))),
        }
    }

    /// JSON 값 관대 변환.
    ///
    /// 표현할 수 없는 값(배열)은 건너뛰고 그 위치를 `skipped`에 기록한다.
    pub fn from_json_lossy(value: &Value, at: &PrefPath, skipped: &mut Vec<PrefPath>) -> Option<Self> {
        match value {
            Value::Null => Some(PrefValue::Null),
            Value::Bool(b) => Some(PrefValue::Bool(*b)),
            Value::Number(n) => Some(PrefValue::Number(n.clone())),
            Value::String(s) => Some(PrefValue::String(s.clone())),
            Value::Object(map) => Some(PrefValue::Tree(PreferenceTree::from_json_object(
                map, at, skipped,
            ))),
            Value::Array(_) => {
                skipped.push(at.clone());
                None
            }
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            PrefValue::Null => Value::Null,
            PrefValue::Bool(b) => Value::Bool(*b),
            PrefValue::Number(n) => Value::Number(n.clone()),
            PrefValue::String(s) => Value::String(s.clone()),
            PrefValue::Tree(t) => t.to_json(),
        }
    }
}

impl From<bool> for PrefValue {
    fn from(value: bool) -> Self {
        PrefValue::Bool(value)
    }
}

impl From<i64> for PrefValue {
    fn from(value: i64) -> Self {
        PrefValue::Number(value.into())
    }
}

impl From<u64> for PrefValue {
    fn from(value: u64) -> Self {
        PrefValue::Number(value.into())
    }
}

impl From<i32> for PrefValue {
    fn from(value: i32) -> Self {
        PrefValue::Number(value.into())
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        PrefValue::String(value.to_string())
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        PrefValue::String(value)
    }
}

impl From<PreferenceTree> for PrefValue {
    fn from(value: PreferenceTree) -> Self {
        PrefValue::Tree(value)
    }
}

impl From<&PrefValue> for Value {
    fn from(value: &PrefValue) -> Self {
        value.to_json()
    }
}
