//! 터미널 출력 포맷.

use aether_core::models::{ControlKind, PrefValue, PreferenceTree};
use aether_settings::{FieldView, SettingsPage, SettingsRegistry};
use std::fmt::Write;

/// 값 표시 (없으면 `(unset)`)
pub fn display_value(value: Option<&PrefValue>) -> String {
    value
        .map(|v| v.to_json().to_string())
        .unwrap_or_else(|| "(unset)".to_string())
}

/// 트리 전체를 `경로 = 값` 줄로 출력
pub fn render_tree(tree: &PreferenceTree) -> String {
    let mut out = String::new();
    for path in tree.leaf_paths() {
        let _ = writeln!(out, "{path} = {}", display_value(tree.get_in(&path)));
    }
    out
}

/// 페이지 목록
pub fn render_page_list(registry: &SettingsRegistry) -> String {
    let mut out = String::new();
    for (index, entry) in registry.entries().iter().enumerate() {
        let _ = writeln!(out, "{index:>2}  {:<14} {}", entry.id, entry.title);
    }
    out
}

/// 페이지 하나
pub fn render_page(page: &SettingsPage<'_>, index: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{index}] {} ({})", page.title, page.id);

    for section in &page.sections {
        out.push('\n');
        if let Some(heading) = section.heading {
            let _ = writeln!(out, "  {heading}");
        }
        for field in &section.fields {
            render_field(&mut out, field);
        }
    }
    out
}

fn render_field(out: &mut String, field: &FieldView<'_>) {
    let marker = if field.enabled { "-" } else { "x" };
    let _ = write!(
        out,
        "    {marker} {}\n        {} = {}",
        field.label,
        field.descriptor.path,
        display_value(field.value.as_ref())
    );
    if !field.enabled {
        out.push_str("  (disabled)");
    }
    out.push('\n');

    match &field.descriptor.kind {
        ControlKind::NumericRange { min, max } => {
            let _ = writeln!(out, "        range: {min}..={max}");
        }
        ControlKind::RadioGroup | ControlKind::ColorPicker => {
            let options: Vec<String> = field
                .descriptor
                .options
                .iter()
                .map(|o| o.value.to_json().to_string())
                .collect();
            let _ = writeln!(out, "        options: {}", options.join(" | "));
        }
        ControlKind::Toggle => {}
    }
}
