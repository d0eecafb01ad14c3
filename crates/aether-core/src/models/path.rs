//! 설정 트리 경로.
//!
//! 중첩된 설정 위치를 가리키는 문자열 키의 순서 있는 목록.
//! JSON에서는 문자열 배열로, CLI에서는 점 표기(`collapsed.auto.height`)로 표현한다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 설정 트리 경로
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefPath(Vec<String>);

impl PrefPath {
    /// 키 목록으로 경로 생성
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// 빈 경로 (트리 루트)
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 하위 키를 덧붙인 새 경로
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut keys = self.0.clone();
        keys.push(key.into());
        Self(keys)
    }

    /// `prefix`로 시작하는지 여부 (자기 자신 포함)
    pub fn starts_with(&self, prefix: &PrefPath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// 마지막 키와 부모 경로로 분리
    pub fn split_last(&self) -> Option<(&String, &[String])> {
        self.0.split_last()
    }

    /// JSON 배열에서 경로 파싱
    ///
    /// 배열이 아니거나 문자열이 아닌 요소가 있으면 `InvalidArgument`.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, CoreError> {
        let items = value.as_array().ok_or_else(|| {
            CoreError::InvalidArgument(format!("경로는 문자열 배열이어야 함: {value}"))
        })?;

        items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    CoreError::InvalidArgument(format!("경로 요소는 문자열이어야 함: {item}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for PrefPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.0.join("."))
    }
}

impl FromStr for PrefPath {
    type Err = CoreError;

    /// 점 표기 파싱. 빈 세그먼트(`a..b`, 앞/뒤 점)는 거부한다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let keys: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if keys.iter().any(|k| k.is_empty()) {
            return Err(CoreError::InvalidArgument(format!(
                "빈 경로 세그먼트: {trimmed}"
            )));
        }
        Ok(Self(keys))
    }
}

impl<S: Into<String>> FromIterator<S> for PrefPath {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl From<&[&str]> for PrefPath {
    fn from(keys: &[&str]) -> Self {
        Self::new(keys.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for PrefPath {
    fn from(keys: [&str; N]) -> Self {
        Self::new(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_dotted() {
        let path: PrefPath = "collapsed.auto.height".parse().unwrap();
        assert_eq!(path, PrefPath::from(["collapsed", "auto", "height"]));
        assert_eq!(path.to_string(), "collapsed.auto.height");
    }

    #[test]
    fn parse_rejects_empty_segment() {
        assert!("collapsed..height".parse::<PrefPath>().is_err());
        assert!(".theme".parse::<PrefPath>().is_err());
    }

    #[test]
    fn from_json_requires_string_array() {
        let path = PrefPath::from_json(&json!(["media", "letterbox"])).unwrap();
        assert_eq!(path.len(), 2);

        assert!(PrefPath::from_json(&json!("media.letterbox")).is_err());
        assert!(PrefPath::from_json(&json!(["media", 1])).is_err());
    }

    #[test]
    fn prefix_check() {
        let parent = PrefPath::from(["collapsed"]);
        let child = parent.child("auto").child("height");
        assert!(child.starts_with(&parent));
        assert!(!parent.starts_with(&child));
    }

    #[test]
    fn serde_as_array() {
        let path = PrefPath::from(["status_icons", "reply"]);
        assert_eq!(
            serde_json::to_value(&path).unwrap(),
            json!(["status_icons", "reply"])
        );
    }
}
