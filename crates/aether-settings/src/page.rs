//! 설정 페이지 뷰 모델.
//!
//! 페이지 빌더가 만드는 결과물. 필드마다 디스크립터, 현재 값, 활성화 여부,
//! 변경 콜백을 묶어 렌더링 레이어가 조건 분기 없이 그릴 수 있게 한다.

use aether_core::evaluator;
use aether_core::models::{FieldDescriptor, PrefPath, PrefValue, PreferenceTree};
use aether_core::CoreError;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// 필드 변경 콜백 (경로, 새 값)
pub type ChangeHandler<'a> = &'a dyn Fn(&PrefPath, PrefValue);

/// 페이지 빌더 입력
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    tree: &'a PreferenceTree,
    on_change: ChangeHandler<'a>,
}

impl<'a> PageContext<'a> {
    pub fn new(tree: &'a PreferenceTree, on_change: ChangeHandler<'a>) -> Self {
        Self { tree, on_change }
    }

    /// 디스크립터를 현재 트리에 대해 해석한 필드 뷰
    pub fn field(&self, descriptor: FieldDescriptor, label: &'static str) -> FieldView<'a> {
        let value = self.tree.get_in(&descriptor.path).cloned();
        let enabled = evaluator::is_enabled(self.tree, &descriptor);
        FieldView {
            descriptor,
            label,
            hint: None,
            value,
            enabled,
            on_change: self.on_change,
        }
    }
}

/// 렌더링 가능한 필드
#[derive(Serialize)]
pub struct FieldView<'a> {
    #[serde(flatten)]
    pub descriptor: FieldDescriptor,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
    /// 현재 값 (경로가 없으면 `None`)
    pub value: Option<PrefValue>,
    pub enabled: bool,
    #[serde(skip)]
    on_change: ChangeHandler<'a>,
}

impl<'a> FieldView<'a> {
    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    /// 사용자 편집 반영.
    ///
    /// 비활성 필드이거나 컨트롤이 받을 수 없는 값이면 `Validation` 에러를
    /// 반환하고 콜백을 호출하지 않는다.
    pub fn change(&self, value: PrefValue) -> Result<(), CoreError> {
        if !self.enabled {
            return Err(CoreError::Validation {
                field: self.descriptor.id.clone(),
                message: "비활성화된 필드".to_string(),
            });
        }

        self.descriptor
            .accepts(&value)
            .map_err(|message| CoreError::Validation {
                field: self.descriptor.id.clone(),
                message,
            })?;

        debug!("필드 변경: {} → {}", self.descriptor.id, self.descriptor.path);
        (self.on_change)(&self.descriptor.path, value);
        Ok(())
    }
}

impl fmt::Debug for FieldView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldView")
            .field("id", &self.descriptor.id)
            .field("path", &self.descriptor.path)
            .field("value", &self.value)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// 페이지 안의 구역 (제목 + 필드)
#[derive(Debug, Serialize)]
pub struct PageSection<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    pub fields: Vec<FieldView<'a>>,
}

impl<'a> PageSection<'a> {
    pub fn new(heading: Option<&'static str>, fields: Vec<FieldView<'a>>) -> Self {
        Self { heading, fields }
    }
}

/// 설정 페이지
#[derive(Debug, Serialize)]
pub struct SettingsPage<'a> {
    pub id: &'static str,
    pub title: &'static str,
    pub sections: Vec<PageSection<'a>>,
}

impl<'a> SettingsPage<'a> {
    pub fn fields(&self) -> impl Iterator<Item = &FieldView<'a>> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn field(&self, id: &str) -> Option<&FieldView<'a>> {
        self.fields().find(|f| f.id() == id)
    }

    /// 경로에 묶인 필드
    pub fn field_for_path(&self, path: &PrefPath) -> Option<&FieldView<'a>> {
        self.fields().find(|f| &f.descriptor.path == path)
    }

    pub fn descriptors(&self) -> Vec<&FieldDescriptor> {
        self.fields().map(|f| &f.descriptor).collect()
    }
}
