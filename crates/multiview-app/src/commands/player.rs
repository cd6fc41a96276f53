use multiview_common::Stream;
use multiview_config::MultiviewConfig;
use multiview_player::{
    drain_scripts, BatchReport, EmbedPlayer, PlayerRegistry, ScriptQueue, ScriptSink,
};
use multiview_state::{load_state, restore, NoLookup};
use serde_json::Value;

use crate::cli::PlayerAction;
use crate::context;

/// Iframe id of the player in slot `index`.
pub fn frame_id(index: usize) -> String {
    format!("multiview-player-{index}")
}

/// One script-driven player per stream, keyed by `platform:id`.
pub fn build_registry(streams: &[Stream], queue: &ScriptQueue) -> PlayerRegistry {
    let mut registry = PlayerRegistry::new();
    for (index, stream) in streams.iter().enumerate() {
        let sink = ScriptSink::new(frame_id(index), queue.clone());
        registry.register(stream.key().to_string(), EmbedPlayer::new(stream.platform, sink));
    }
    registry
}

pub fn dispatch(registry: &mut PlayerRegistry, action: PlayerAction, level: u32) -> BatchReport {
    match action {
        PlayerAction::Play => registry.play_all(),
        PlayerAction::Pause => registry.pause_all(),
        PlayerAction::Mute => registry.mute_all(),
        PlayerAction::Unmute => registry.unmute_all(),
        PlayerAction::Volume => registry.set_volume_all(level),
    }
}

pub fn run(
    config: &MultiviewConfig,
    action: PlayerAction,
    level: Option<u32>,
) -> multiview_common::Result<Value> {
    let mut store = context::open_store(config)?;
    let streams = load_state(store.as_mut(), &config.session.storage_key)
        .map(|state| {
            let restored = restore(state, &NoLookup);
            context::into_session(config, restored, false).streams().to_vec()
        })
        .unwrap_or_default();

    let queue = ScriptQueue::default();
    let mut registry = build_registry(&streams, &queue);
    let report = dispatch(
        &mut registry,
        action,
        level.unwrap_or(config.player.default_volume),
    );

    let statuses: serde_json::Map<String, Value> = registry
        .ids()
        .into_iter()
        .filter_map(|id| {
            let status = registry.status(&id)?;
            Some((id, serde_json::to_value(status).ok()?))
        })
        .collect();

    super::to_json(&serde_json::json!({
        "players": registry.len(),
        "report": report,
        "statuses": statuses,
        "scripts": drain_scripts(&queue),
    }))
}
