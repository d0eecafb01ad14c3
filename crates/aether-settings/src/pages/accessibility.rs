//! 접근성 페이지: 아이콘 색상, 알림 배지, 게시물 아이콘.

use super::toggle;
use crate::page::{PageContext, PageSection, SettingsPage};

/// 게시물 아이콘 토글 (키, 라벨)
const STATUS_ICONS: &[(&str, &str)] = &[
    ("language", "Language indicator"),
    ("reply", "Reply indicator"),
    ("local_only", "Local-only indicator"),
    ("media", "Media and poll indicators"),
    ("visibility", "Post privacy indicator"),
];

pub fn build<'a>(ctx: &PageContext<'a>) -> SettingsPage<'a> {
    let status_icons = STATUS_ICONS
        .iter()
        .map(|&(key, label)| ctx.field(toggle(&["status_icons", key]), label))
        .collect();

    SettingsPage {
        id: "accessibility",
        title: "Accessibility",
        sections: vec![
            PageSection::new(
                None,
                vec![
                    ctx.field(toggle(&["hicolor_privacy_icons"]), "High color privacy icons")
                        .with_hint("Display privacy icons in bright and easily distinguishable colors"),
                    ctx.field(
                        toggle(&["confirm_boost_missing_media_description"]),
                        "Show confirmation dialog before boosting posts lacking media descriptions",
                    ),
                ],
            ),
            PageSection::new(
                Some("Notifications options"),
                vec![
                    ctx.field(toggle(&["notifications", "tab_badge"]), "Unread notifications badge")
                        .with_hint(
                            "Display a badge for unread notifications in the column icons when the notifications column isn't open",
                        ),
                    ctx.field(
                        toggle(&["notifications", "favicon_badge"]),
                        "Unread notifications favicon badge",
                    )
                    .with_hint("Add a badge for unread notifications to the favicon"),
                ],
            ),
            PageSection::new(Some("Post icons"), status_icons),
        ],
    }
}
