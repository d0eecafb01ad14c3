//! 일반(외관) 페이지: 테마, 강조색, 링크 표시, 멘션 재작성.

use aether_core::models::{ControlKind, FieldDescriptor, FieldOption, PrefPath};

use super::{field_id, radio, toggle};
use crate::page::{PageContext, PageSection, SettingsPage};

/// 강조색 견본 (값, 이름). 사용자 지정 `#rrggbb`도 허용된다.
pub const ACCENT_SWATCHES: &[(&str, &str)] = &[
    ("default", "Default"),
    ("#589734", "Green"),
    ("#377ee4", "Blue"),
    ("#a539ff", "Purple"),
    ("#ff8300", "Orange"),
    ("#ffce00", "Yellow"),
    ("#f02727", "Red"),
    ("#f027be", "Pink"),
    ("#6364ff", "Mammoth"),
    ("#b4e900", "Keystone"),
    ("#d1bcf5", "Goby"),
    ("mono", "Monochrome"),
];

fn accent() -> FieldDescriptor {
    let path = PrefPath::from(["accent"]);
    FieldDescriptor::new(field_id(&path), path, ControlKind::ColorPicker).with_options(
        ACCENT_SWATCHES
            .iter()
            .map(|(value, label)| FieldOption::new(*value, *label))
            .collect(),
    )
}

pub fn build<'a>(ctx: &PageContext<'a>) -> SettingsPage<'a> {
    let theme = radio(
        &["theme"],
        vec![
            FieldOption::new("auto", "Automatic"),
            FieldOption::new("light", "Light"),
            FieldOption::new("dark", "Dark"),
            FieldOption::new("mixed", "Mixed"),
        ],
    );

    let rewrite_mentions = radio(
        &["rewrite_mentions"],
        vec![
            FieldOption::new("no", "Do not rewrite mentions"),
            FieldOption::new(
                "acct",
                "Rewrite with username and domain (when the account is remote)",
            ),
            FieldOption::new("username", "Rewrite with username"),
        ],
    );

    SettingsPage {
        id: "general",
        title: "Appearance",
        sections: vec![
            PageSection::new(
                None,
                vec![
                    ctx.field(theme, "Theme"),
                    ctx.field(accent(), "Accent Color")
                        .with_hint("Change the accent color of the entire site"),
                ],
            ),
            PageSection::new(
                Some("Tag Misleading Links"),
                vec![
                    ctx.field(toggle(&["tag_misleading_links"]), "Tag misleading links")
                        .with_hint(
                            "Add a visual indication with the link target host to every link not mentioning it explicitly",
                        ),
                    ctx.field(rewrite_mentions, "Rewrite mentions in displayed statuses"),
                ],
            ),
        ],
    }
}
