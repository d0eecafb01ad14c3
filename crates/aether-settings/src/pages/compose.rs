//! 작성 상자 페이지.

use aether_core::models::FieldOption;

use super::{privacy_options, radio, toggle};
use crate::page::{PageContext, PageSection, SettingsPage};

pub fn build<'a>(ctx: &PageContext<'a>) -> SettingsPage<'a> {
    let mut side_arm_options = vec![FieldOption::new("none", "None")];
    side_arm_options.extend(privacy_options());
    let side_arm = radio(&["side_arm"], side_arm_options);

    let side_arm_reply_mode = radio(
        &["side_arm_reply_mode"],
        vec![
            FieldOption::new("keep", "Keep its set privacy"),
            FieldOption::new("copy", "Copy privacy setting of the post being replied to"),
            FieldOption::new(
                "restrict",
                "Restrict privacy setting to that of the post being replied to",
            ),
        ],
    );

    SettingsPage {
        id: "compose_box",
        title: "Compose box",
        sections: vec![PageSection::new(
            None,
            vec![
                ctx.field(
                    toggle(&["always_show_spoilers_field"]),
                    "Always enable the Content Warning field",
                ),
                ctx.field(
                    toggle(&["prepend_cw_re"]),
                    "Prepend \u{201c}re: \u{201d} to content warnings when replying",
                ),
                ctx.field(toggle(&["preselect_on_reply"]), "Pre-select usernames on reply")
                    .with_hint(
                        "When replying to a conversation with multiple participants, pre-select usernames past the first",
                    ),
                ctx.field(
                    toggle(&["confirm_missing_media_description"]),
                    "Show confirmation dialog before sending posts lacking media descriptions",
                ),
                ctx.field(
                    toggle(&["confirm_before_clearing_draft"]),
                    "Show confirmation dialog before overwriting the message being composed",
                ),
                ctx.field(side_arm, "Secondary post button:"),
                ctx.field(
                    side_arm_reply_mode,
                    "When replying to a post, the secondary post button should:",
                ),
            ],
        )],
    }
}
