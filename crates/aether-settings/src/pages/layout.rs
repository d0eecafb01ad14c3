//! 레이아웃 페이지.

use aether_core::models::FieldOption;

use super::{radio, toggle};
use crate::page::{PageContext, PageSection, SettingsPage};

pub fn build<'a>(ctx: &PageContext<'a>) -> SettingsPage<'a> {
    let layout = radio(
        &["layout"],
        vec![
            FieldOption::new("normal", "Normal Layout").with_hint(
                "Use the default simple layout. This lays out information in a less compact and more readable way.",
            ),
            FieldOption::new("advanced", "Advanced Layout").with_hint(
                "Allows you to configure multiple columns to see as much information as you want (e.g. home, notifications, timeline, lists and hashtags).",
            ),
        ],
    );

    SettingsPage {
        id: "layout",
        title: "Layout",
        sections: vec![PageSection::new(
            Some("Layout options"),
            vec![
                ctx.field(layout, "Layout"),
                ctx.field(toggle(&["stretch"]), "Wide view (Advanced Layout only)")
                    .with_hint("Stretches columns to better fill the available space."),
            ],
        )],
    }
}
