use multiview_config::MultiviewConfig;
use multiview_state::{load_state, restore, NoLookup};
use serde_json::Value;
use tracing::info;

use super::SessionView;
use crate::cli::SessionAction;
use crate::context;

pub fn run(config: &MultiviewConfig, action: SessionAction) -> multiview_common::Result<Value> {
    let mut store = context::open_store(config)?;
    let key = config.session.storage_key.as_str();

    match action {
        SessionAction::Show => {
            let Some(state) = load_state(store.as_mut(), key) else {
                return Ok(serde_json::json!({ "stored": false }));
            };
            let session = context::into_session(config, restore(state, &NoLookup), false);
            let viewport = multiview_common::Rect::new(0.0, 0.0, 1280.0, 720.0);
            super::to_json(&serde_json::json!({
                "stored": true,
                "session": SessionView::new(&session, viewport),
            }))
        }
        SessionAction::Clear => {
            store.remove(key)?;
            info!(key, "stored session cleared");
            Ok(serde_json::json!({ "cleared": true }))
        }
    }
}
