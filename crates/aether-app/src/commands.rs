//! 하위 명령 실행.
//!
//! 각 명령은 출력할 텍스트를 반환하고 `run`이 한 번에 출력한다.

use aether_core::models::{PrefPath, PrefValue};
use aether_core::reducer::{self, Action};
use aether_core::store::SettingsStore;
use aether_settings::SettingsRegistry;
use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use std::cell::RefCell;
use std::path::Path;
use tracing::info;

use crate::render::{display_value, render_page, render_page_list, render_tree};
use crate::Command;

pub fn run(store: &SettingsStore, command: Command) -> Result<()> {
    let registry = SettingsRegistry::standard();

    let output = match command {
        Command::Show { json } => show(store, json)?,
        Command::Get { path } => get(store, &path)?,
        Command::Set { path, value, raw } => set(store, &registry, &path, &value, raw)?,
        Command::Delete { path } => delete(store, &path)?,
        Command::Hydrate { file } => hydrate_file(store, &file)?,
        Command::Pages => render_page_list(&registry),
        Command::Page { index, json } => page(store, &registry, index, json)?,
        Command::Check { path } => check(store, &registry, &path)?,
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn parse_path(raw: &str) -> Result<PrefPath> {
    raw.parse::<PrefPath>()
        .with_context(|| format!("잘못된 설정 경로: {raw:?}"))
}

/// 명령줄 값 해석. JSON으로 읽히지 않으면 문자열.
fn parse_value(raw: &str) -> Result<PrefValue> {
    let json = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok(PrefValue::from_json(&json)?)
}

fn show(store: &SettingsStore, json: bool) -> Result<String> {
    let tree = store.snapshot();
    if json {
        Ok(serde_json::to_string_pretty(&tree.to_json())?)
    } else {
        Ok(render_tree(&tree))
    }
}

fn get(store: &SettingsStore, raw_path: &str) -> Result<String> {
    let path = parse_path(raw_path)?;
    let value = store
        .get(&path)
        .ok_or_else(|| anyhow!("설정 없음: {path}"))?;

    match value {
        PrefValue::Tree(subtree) => Ok(render_tree(&subtree)),
        other => Ok(display_value(Some(&other))),
    }
}

/// 경로에 묶인 필드가 있으면 페이지의 변경 콜백을 거쳐 검증
fn stage_through_field(
    store: &SettingsStore,
    registry: &SettingsRegistry,
    path: &PrefPath,
    value: PrefValue,
) -> Result<(PrefPath, PrefValue)> {
    let Some((index, _)) = registry.find_field(path) else {
        return Ok((path.clone(), value));
    };

    let tree = store.snapshot();
    let staged = RefCell::new(None);
    let on_change = |p: &PrefPath, v: PrefValue| {
        *staged.borrow_mut() = Some((p.clone(), v));
    };

    {
        let page = registry.render(index, &tree, &on_change);
        let field = page
            .field_for_path(path)
            .ok_or_else(|| anyhow!("페이지 {index}에 필드 없음: {path}"))?;
        field.change(value)?;
    }

    staged
        .into_inner()
        .ok_or_else(|| anyhow!("필드 변경이 전달되지 않음: {path}"))
}

fn set(
    store: &SettingsStore,
    registry: &SettingsRegistry,
    raw_path: &str,
    raw_value: &str,
    raw: bool,
) -> Result<String> {
    let path = parse_path(raw_path)?;
    let value = parse_value(raw_value)?;

    let (path, value) = if raw {
        (path, value)
    } else {
        stage_through_field(store, registry, &path, value)?
    };

    let tree = store.dispatch(&Action::Change {
        path: path.clone(),
        value,
    })?;
    Ok(format!("{path} = {}", display_value(tree.get_in(&path))))
}

fn delete(store: &SettingsStore, raw_path: &str) -> Result<String> {
    let path = parse_path(raw_path)?;
    let before = store.snapshot();

    let after = store.dispatch(&Action::Delete { path: path.clone() })?;
    if after == before {
        Ok(format!("{path}: 설정 없음 (변경 없음)"))
    } else {
        Ok(format!("{path}: 삭제됨"))
    }
}

/// 파일의 설정을 병합하고 저장. 전체 저장소 상태 blob이면 `local_settings`만 사용.
fn hydrate_file(store: &SettingsStore, file: &Path) -> Result<String> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("파일 읽기 실패: {}", file.display()))?;
    let blob: Value = serde_json::from_str(&content)
        .with_context(|| format!("JSON 파싱 실패: {}", file.display()))?;

    let (state, skipped) = reducer::decode_persisted(&blob)?;
    let merged_keys = state.len();
    store.dispatch(&Action::Hydrate { state })?;
    store.persist()?;
    info!("설정 가져오기 완료: {}", file.display());

    Ok(format!(
        "최상위 키 {merged_keys}개 병합, {}개 건너뜀",
        skipped.len()
    ))
}

fn page(store: &SettingsStore, registry: &SettingsRegistry, index: i64, json: bool) -> Result<String> {
    // 음수도 범위 밖으로 취급
    let requested = usize::try_from(index).unwrap_or(usize::MAX);
    let resolved = registry.resolve_index(requested);

    let tree = store.snapshot();
    let noop = |_: &PrefPath, _: PrefValue| {};
    let page = registry.render(resolved, &tree, &noop);

    if json {
        Ok(serde_json::to_string_pretty(&page)?)
    } else {
        Ok(render_page(&page, resolved))
    }
}

fn check(store: &SettingsStore, registry: &SettingsRegistry, raw_path: &str) -> Result<String> {
    let path = parse_path(raw_path)?;
    let Some((index, descriptor)) = registry.find_field(&path) else {
        bail!("경로에 묶인 설정 필드 없음: {path}");
    };

    let tree = store.snapshot();
    let state = if store.is_enabled(&descriptor) {
        "enabled"
    } else {
        "disabled"
    };

    let mut lines = vec![format!("{} (page {index}): {state}", descriptor.id)];
    for dep in &descriptor.depends_on {
        lines.push(format!(
            "  requires truthy {dep} = {}",
            display_value(tree.get_in(dep))
        ));
    }
    for dep in &descriptor.depends_on_not {
        lines.push(format!(
            "  requires falsy  {dep} = {}",
            display_value(tree.get_in(dep))
        ));
    }
    Ok(lines.join("\n"))
}
