//! 설정 스토어.
//!
//! 세션 동안 살아 있는 단일 설정 트리를 소유하고 액션을 순서대로 적용한다.
//! 읽기는 O(1) 스냅샷 복제이므로 진행 중인 dispatch와 무관하게 항상 완전한
//! 버전을 본다.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::defaults::default_tree;
use crate::error::CoreError;
use crate::evaluator;
use crate::models::{FieldDescriptor, PrefPath, PrefValue, PreferenceTree};
use crate::ports::storage::PreferenceStorage;
use crate::reducer::{self, Action};

/// 설정 스토어
pub struct SettingsStore {
    /// 현재 트리 (스레드 안전)
    tree: RwLock<PreferenceTree>,
    /// 영속 저장소
    storage: Arc<dyn PreferenceStorage>,
}

impl SettingsStore {
    /// 기본 트리에 저장된 설정을 hydrate하여 스토어 생성
    ///
    /// 저장소 읽기/파싱 실패는 경고만 남기고 기본값으로 시작한다.
    pub fn open(storage: Arc<dyn PreferenceStorage>) -> Self {
        let defaults = default_tree();

        let tree = match storage.load() {
            Ok(Some(blob)) => match reducer::decode_persisted(&blob) {
                Ok((incoming, _)) => {
                    info!("저장된 설정 로드 완료: {}", storage.describe());
                    reducer::hydrate(&defaults, &incoming)
                }
                Err(e) => {
                    warn!("저장된 설정 형식 오류, 기본값 사용: {e}");
                    defaults
                }
            },
            Ok(None) => {
                info!("저장된 설정 없음, 기본값 사용: {}", storage.describe());
                defaults
            }
            Err(e) => {
                warn!("설정 로드 실패, 기본값 사용: {e}");
                defaults
            }
        };

        Self::with_tree(tree, storage)
    }

    /// 지정된 트리로 스토어 생성 (저장소 로드 없음)
    pub fn with_tree(tree: PreferenceTree, storage: Arc<dyn PreferenceStorage>) -> Self {
        Self {
            tree: RwLock::new(tree),
            storage,
        }
    }

    /// 현재 트리 스냅샷
    pub fn snapshot(&self) -> PreferenceTree {
        self.tree.read().clone()
    }

    pub fn get(&self, path: &PrefPath) -> Option<PrefValue> {
        self.tree.read().get_in(path).cloned()
    }

    pub fn is_enabled(&self, descriptor: &FieldDescriptor) -> bool {
        evaluator::is_enabled(&self.tree.read(), descriptor)
    }

    /// 액션 적용.
    ///
    /// change/delete는 새 트리 전체를 저장한 뒤에만 반영한다. 실패하면
    /// 에러를 반환하고 현재 트리는 그대로다. hydrate는 저장하지 않는다.
    pub fn dispatch(&self, action: &Action) -> Result<PreferenceTree, CoreError> {
        let mut current = self.tree.write();
        let next = reducer::reduce(&current, action)?;

        if next == *current {
            debug!("변경 없음: {}", action.kind());
            return Ok(next);
        }

        if !matches!(action, Action::Hydrate { .. }) {
            self.storage.save(&next.to_json())?;
            debug!("설정 저장 완료: {}", self.storage.describe());
        }

        *current = next.clone();
        Ok(next)
    }

    /// 현재 트리를 그대로 저장 (hydrate 결과를 가져오기로 확정할 때)
    pub fn persist(&self) -> Result<(), CoreError> {
        let current = self.tree.read();
        self.storage.save(&current.to_json())?;
        info!("설정 저장 완료: {}", self.storage.describe());
        Ok(())
    }

    /// 저장소 위치 설명
    pub fn storage_location(&self) -> String {
        self.storage.describe()
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("storage", &self.storage.describe())
            .field("keys", &self.tree.read().len())
            .finish()
    }
}
