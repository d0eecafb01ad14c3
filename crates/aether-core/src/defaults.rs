//! 기본 설정 트리.
//!
//! 알려진 모든 로컬 UI 설정의 기본값. 모든 리프가 구체적인 값을 가지므로
//! 호출부에서 null 대체 처리가 필요 없다 (`content_warnings.filter`의
//! 기본값은 명시적 `null`).

use crate::models::{PrefValue, PreferenceTree};

/// 자동 접기 높이 기본값 (픽셀)
pub const DEFAULT_COLLAPSE_HEIGHT: i64 = 1400;

/// 기본 설정 트리 생성
pub fn default_tree() -> PreferenceTree {
    PreferenceTree::new()
        .with("layout", "normal")
        .with("stretch", true)
        .with("accent", "default")
        .with("side_arm", "none")
        .with("side_arm_reply_mode", "keep")
        .with("always_show_spoilers_field", false)
        .with("confirm_missing_media_description", false)
        .with("confirm_boost_missing_media_description", false)
        .with("confirm_before_clearing_draft", true)
        .with("prepend_cw_re", true)
        .with("preselect_on_reply", true)
        .with("inline_preview_cards", true)
        .with("hicolor_privacy_icons", false)
        .with("show_content_type_choice", false)
        .with("tag_misleading_links", true)
        .with("rewrite_mentions", "no")
        .with("theme", "auto")
        .with("cw_visibility", "obscured")
        .with("hashtag_cw", false)
        .with("right_column", right_column())
        .with("content_warnings", content_warnings())
        .with("collapsed", collapsed())
        .with("media", media())
        .with("notifications", notifications())
        .with("status_icons", status_icons())
}

fn right_column() -> PreferenceTree {
    let widgets = PreferenceTree::new()
        .with("lists", true)
        .with("hashtags", true)
        .with("suggestions", false);

    PreferenceTree::new()
        .with("visibility", "show")
        .with("widgets", widgets)
}

fn content_warnings() -> PreferenceTree {
    PreferenceTree::new()
        .with("filter", PrefValue::Null)
        .with("media_outside", false)
        .with("shared_state", false)
}

fn collapsed() -> PreferenceTree {
    let auto = PreferenceTree::new()
        .with("all", false)
        .with("notifications", true)
        .with("lengthy", true)
        .with("reblogs", false)
        .with("replies", false)
        .with("media", false)
        .with("height", DEFAULT_COLLAPSE_HEIGHT);

    let backgrounds = PreferenceTree::new()
        .with("user_backgrounds", false)
        .with("preview_images", false);

    PreferenceTree::new()
        .with("enabled", true)
        .with("auto", auto)
        .with("backgrounds", backgrounds)
        .with("show_action_bar", false)
}

fn media() -> PreferenceTree {
    PreferenceTree::new()
        .with("letterbox", true)
        .with("fullwidth", true)
        .with("reveal_behind_cw", false)
        .with("pop_in_player", true)
}

fn notifications() -> PreferenceTree {
    PreferenceTree::new()
        .with("favicon_badge", true)
        .with("tab_badge", true)
}

fn status_icons() -> PreferenceTree {
    PreferenceTree::new()
        .with("language", true)
        .with("reply", true)
        .with("local_only", true)
        .with("media", true)
        .with("visibility", true)
}
