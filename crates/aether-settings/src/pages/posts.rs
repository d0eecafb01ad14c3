//! 게시물 페이지: 접기, 민감한 콘텐츠, 미디어.

use aether_core::models::{ControlKind, FieldDescriptor, FieldOption, PrefPath};

use super::{field_id, radio, toggle};
use crate::page::{PageContext, PageSection, SettingsPage};

/// 자동 접기 높이 슬라이더 범위 (픽셀)
pub const COLLAPSE_HEIGHT_MIN: f64 = 400.0;
pub const COLLAPSE_HEIGHT_MAX: f64 = 2000.0;

/// 자동 접기 높이. 접기가 켜져 있고 "모두 접기"가 꺼져 있을 때만 활성화.
pub fn collapse_height() -> FieldDescriptor {
    let path = PrefPath::from(["collapsed", "auto", "height"]);
    FieldDescriptor::new(
        field_id(&path),
        path,
        ControlKind::NumericRange {
            min: COLLAPSE_HEIGHT_MIN,
            max: COLLAPSE_HEIGHT_MAX,
        },
    )
    .depends_on(["collapsed", "enabled"])
    .depends_on_not(["collapsed", "auto", "all"])
}

pub fn build<'a>(ctx: &PageContext<'a>) -> SettingsPage<'a> {
    let cw_visibility = radio(
        &["cw_visibility"],
        vec![
            FieldOption::new("obscured", "Obscured"),
            FieldOption::new("hidden", "Hidden"),
            FieldOption::new("visible", "Visible"),
            FieldOption::new("lockdown", "Lockdown"),
        ],
    );

    SettingsPage {
        id: "posts",
        title: "Posts",
        sections: vec![
            PageSection::new(
                Some("Collapse posts"),
                vec![ctx
                    .field(toggle(&["collapsed", "enabled"]), "Enable collapsed posts")
                    .with_hint(
                        "Collapsed posts have parts of their contents hidden to take up less screen space. This is distinct from the Content Warning feature",
                    )],
            ),
            PageSection::new(
                Some("Automatic collapsing"),
                vec![ctx.field(
                    collapse_height(),
                    "Height (in pixels) for a post to be considered lengthy",
                )],
            ),
            PageSection::new(
                Some("Sensitive Content"),
                vec![
                    ctx.field(cw_visibility, "Content visibility:").with_hint(
                        "Change whether a post with a content warning and/or attachment is obscured, completely hidden, or shown by default",
                    ),
                    ctx.field(
                        toggle(&["hashtag_cw"]),
                        "Show the hashtag bar even when a post is obscured or hidden",
                    ),
                ],
            ),
            PageSection::new(
                Some("Media"),
                vec![
                    ctx.field(
                        toggle(&["inline_preview_cards"]),
                        "Inline preview cards for external links",
                    ),
                    ctx.field(toggle(&["media", "pop_in_player"]), "Enable pop-in player"),
                ],
            ),
        ],
    }
}
