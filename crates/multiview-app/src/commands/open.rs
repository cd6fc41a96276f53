use multiview_config::MultiviewConfig;
use multiview_state::{load_session, save_state, CompactState, MultiviewQuery, NoLookup};
use serde_json::Value;
use tracing::info;

use super::SessionView;
use crate::cli::Viewport;
use crate::context;

pub fn run(
    config: &MultiviewConfig,
    input: &str,
    persist: bool,
    viewport: Viewport,
) -> multiview_common::Result<Value> {
    let query = MultiviewQuery::parse(input);
    let mut store = context::open_store(config)?;
    let key = config.session.storage_key.as_str();
    let is_mobile = viewport.is_mobile(config);

    let (source, session, placeholders) =
        match load_session(&query, store.as_mut(), key, &NoLookup) {
            Some((source, restored)) => {
                let placeholders = restored.placeholders;
                let session = context::into_session(config, restored, is_mobile);
                (Some(source), session, placeholders)
            }
            None => (None, context::new_session(config, is_mobile), 0),
        };

    if persist {
        save_state(store.as_mut(), key, &CompactState::from_session(&session))?;
        info!(key, streams = session.stream_count(), "session persisted");
    }

    super::to_json(&serde_json::json!({
        "source": source,
        "placeholders": placeholders,
        "persisted": persist,
        "session": SessionView::new(&session, viewport.rect()),
    }))
}
