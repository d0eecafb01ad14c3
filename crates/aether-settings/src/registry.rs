//! 설정 페이지 레지스트리.
//!
//! 고정 순서의 페이지 빌더 목록. 범위를 벗어난 인덱스는 에러 대신 첫
//! 페이지로 대체된다 (사용자용 선택기).

use aether_core::defaults::default_tree;
use aether_core::models::{FieldDescriptor, PrefPath, PrefValue, PreferenceTree};
use aether_core::CoreError;
use tracing::debug;

use crate::page::{ChangeHandler, PageContext, SettingsPage};
use crate::pages;

/// 페이지 빌더 함수
pub type PageBuilder = for<'a> fn(&PageContext<'a>) -> SettingsPage<'a>;

/// 레지스트리 항목 (탐색 목록용 ID/제목 + 빌더)
#[derive(Clone, Copy)]
pub struct PageEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub build: PageBuilder,
}

impl std::fmt::Debug for PageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageEntry")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish()
    }
}

/// 설정 페이지 레지스트리
#[derive(Debug, Clone)]
pub struct SettingsRegistry {
    pages: Vec<PageEntry>,
}

impl SettingsRegistry {
    /// 표준 5개 페이지
    pub fn standard() -> Self {
        Self {
            pages: vec![
                PageEntry {
                    id: "general",
                    title: "Appearance",
                    build: pages::general::build,
                },
                PageEntry {
                    id: "layout",
                    title: "Layout",
                    build: pages::layout::build,
                },
                PageEntry {
                    id: "compose_box",
                    title: "Compose box",
                    build: pages::compose::build,
                },
                PageEntry {
                    id: "posts",
                    title: "Posts",
                    build: pages::posts::build,
                },
                PageEntry {
                    id: "accessibility",
                    title: "Accessibility",
                    build: pages::accessibility::build,
                },
            ],
        }
    }

    /// 사용자 정의 페이지 목록. 비어 있으면 대체할 첫 페이지가 없으므로 에러.
    pub fn new(pages: Vec<PageEntry>) -> Result<Self, CoreError> {
        if pages.is_empty() {
            return Err(CoreError::Config("설정 페이지가 하나 이상 필요함".to_string()));
        }
        Ok(Self { pages })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn entries(&self) -> &[PageEntry] {
        &self.pages
    }

    /// 범위 밖이면 0
    pub fn resolve_index(&self, index: usize) -> usize {
        if index < self.pages.len() {
            index
        } else {
            debug!("페이지 인덱스 {index} 범위 밖, 첫 페이지로 대체");
            0
        }
    }

    pub fn select(&self, index: usize) -> &PageEntry {
        &self.pages[self.resolve_index(index)]
    }

    /// 페이지 빌드
    pub fn render<'a>(
        &self,
        index: usize,
        tree: &'a PreferenceTree,
        on_change: ChangeHandler<'a>,
    ) -> SettingsPage<'a> {
        let entry = self.select(index);
        (entry.build)(&PageContext::new(tree, on_change))
    }

    /// 모든 페이지의 필드 디스크립터 (페이지 인덱스와 함께)
    pub fn descriptors(&self) -> Vec<(usize, FieldDescriptor)> {
        let tree = default_tree();
        let noop = |_: &PrefPath, _: PrefValue| {};

        self.pages
            .iter()
            .enumerate()
            .flat_map(|(index, entry)| {
                let page = (entry.build)(&PageContext::new(&tree, &noop));
                page.fields()
                    .map(|f| (index, f.descriptor.clone()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// 경로에 묶인 필드 찾기
    pub fn find_field(&self, path: &PrefPath) -> Option<(usize, FieldDescriptor)> {
        self.descriptors()
            .into_iter()
            .find(|(_, descriptor)| &descriptor.path == path)
    }
}

impl Default for SettingsRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
