//! 설정 화면 필드 디스크립터.
//!
//! 컨트롤 하나의 정적 메타데이터: 대상 경로, 컨트롤 종류, 선택지,
//! 활성화 의존성(`depends_on` / `depends_on_not`).

use serde::Serialize;

use super::path::PrefPath;
use super::value::PrefValue;

/// 컨트롤 종류
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlKind {
    /// 켜기/끄기
    Toggle,
    /// 선택지 중 하나
    RadioGroup,
    /// 색상 견본 선택 + 사용자 지정 `#rrggbb`
    ColorPicker,
    /// 숫자 범위 슬라이더 (양 끝 포함)
    NumericRange { min: f64, max: f64 },
}

/// 라디오/색상 선택지
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOption {
    pub value: PrefValue,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl FieldOption {
    pub fn new(value: impl Into<PrefValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// 설정 컨트롤 디스크립터
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// 컨트롤 식별자 (예: `settings--collapsed-auto-height`)
    pub id: String,
    /// 값이 저장되는 경로
    pub path: PrefPath,
    pub kind: ControlKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    /// 모두 truthy여야 활성화
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<PrefPath>,
    /// 모두 falsy여야 활성화
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on_not: Vec<PrefPath>,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>, path: impl Into<PrefPath>, kind: ControlKind) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            kind,
            options: Vec::new(),
            depends_on: Vec::new(),
            depends_on_not: Vec::new(),
        }
    }

    pub fn toggle(id: impl Into<String>, path: impl Into<PrefPath>) -> Self {
        Self::new(id, path, ControlKind::Toggle)
    }

    pub fn radio(
        id: impl Into<String>,
        path: impl Into<PrefPath>,
        options: Vec<FieldOption>,
    ) -> Self {
        Self::new(id, path, ControlKind::RadioGroup).with_options(options)
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn depends_on(mut self, path: impl Into<PrefPath>) -> Self {
        self.depends_on.push(path.into());
        self
    }

    pub fn depends_on_not(mut self, path: impl Into<PrefPath>) -> Self {
        self.depends_on_not.push(path.into());
        self
    }

    /// 이 컨트롤이 `value`를 받을 수 있는지 검사
    pub fn accepts(&self, value: &PrefValue) -> Result<(), String> {
        match &self.kind {
            ControlKind::Toggle => value
                .as_bool()
                .map(|_| ())
                .ok_or_else(|| format!("bool 값이 필요함 ({})", value.kind_name())),
            ControlKind::RadioGroup => {
                if self.options.iter().any(|o| &o.value == value) {
                    Ok(())
                } else {
                    Err(format!("선택지에 없는 값: {}", value.to_json()))
                }
            }
            ControlKind::ColorPicker => {
                let preset = self.options.iter().any(|o| &o.value == value);
                let custom = value.as_str().is_some_and(is_hex_color);
                if preset || custom {
                    Ok(())
                } else {
                    Err(format!("색상 견본 또는 #rrggbb 값이 필요함: {}", value.to_json()))
                }
            }
            ControlKind::NumericRange { min, max } => match value.as_f64() {
                Some(n) if n >= *min && n <= *max => Ok(()),
                Some(n) => Err(format!("범위 밖의 값: {n} (허용: {min}..={max})")),
                None => Err(format!("숫자 값이 필요함 ({})", value.kind_name())),
            },
        }
    }
}

/// `#rrggbb` 형식 여부
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
