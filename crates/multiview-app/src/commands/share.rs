use multiview_common::{LayoutType, Stream};
use multiview_config::MultiviewConfig;
use multiview_state::{config_url, encode, share_url, CompactState};
use serde_json::Value;
use tracing::warn;

use crate::context;

pub fn run(
    config: &MultiviewConfig,
    urls: &[String],
    layout: Option<LayoutType>,
    base: Option<&str>,
) -> multiview_common::Result<Value> {
    let mut session = context::new_session(config, false);
    if let Some(layout) = layout {
        session.set_layout(layout);
    }

    let mut skipped = Vec::new();
    for url in urls {
        match Stream::from_url(url) {
            Some(stream) => {
                if !session.add_stream(stream) {
                    warn!(url = %url, "stream not added (duplicate or session full)");
                    skipped.push(url.clone());
                }
            }
            None => {
                warn!(url = %url, "not a stream URL");
                skipped.push(url.clone());
            }
        }
    }

    let base = base.unwrap_or(&config.share.base_url);
    let state = CompactState::from_session(&session);
    super::to_json(&serde_json::json!({
        "state": encode(&state),
        "share_url": share_url(base, &state)?,
        "config_url": config_url(base, session.streams())?,
        "streams": session.streams(),
        "skipped": skipped,
    }))
}
