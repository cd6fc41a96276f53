//! Validation for session, share, player, and schedule sections.

use multiview_common::MAX_STREAMS;

use crate::schema::MultiviewConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_i32};

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &MultiviewConfig) {
    validate_range(
        errors,
        "session.max_streams",
        config.session.max_streams,
        1,
        MAX_STREAMS as u32,
    );
    validate_non_empty(errors, "session.storage_key", &config.session.storage_key);
    if config
        .session
        .storage_key
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
    {
        errors.push(format!(
            "session.storage_key = {:?} may only contain [A-Za-z0-9_-]",
            config.session.storage_key
        ));
    }
}

pub(crate) fn validate_share(errors: &mut Vec<String>, config: &MultiviewConfig) {
    let base = &config.share.base_url;
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        errors.push(format!("share.base_url = {base:?} must be an http(s) URL"));
    }
    validate_non_empty(errors, "share.embed_parent", &config.share.embed_parent);
}

pub(crate) fn validate_player(errors: &mut Vec<String>, config: &MultiviewConfig) {
    validate_range(
        errors,
        "player.default_volume",
        config.player.default_volume,
        0,
        100,
    );
}

pub(crate) fn validate_schedule(errors: &mut Vec<String>, config: &MultiviewConfig) {
    validate_range_i32(
        errors,
        "schedule.utc_offset_minutes",
        config.schedule.utc_offset_minutes,
        -720,
        840,
    );
    validate_range(errors, "schedule.block_hours", config.schedule.block_hours, 1, 24);
}
