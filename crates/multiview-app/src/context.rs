//! Wiring config into sessions and stores.

use multiview_common::MultiviewError;
use multiview_config::MultiviewConfig;
use multiview_layout::{LayoutEngine, LayoutResolver, MultiviewSession};
use multiview_state::{FileStore, MemoryStore, RestoredSession, SessionStore};

use crate::paths;

pub fn layout_engine(config: &MultiviewConfig) -> LayoutEngine {
    LayoutEngine {
        gap: config.layout.gap,
        outer_padding: config.layout.outer_padding,
        pip_scale: config.layout.pip_scale,
        pip_margin: config.layout.pip_margin,
    }
}

pub fn layout_resolver(config: &MultiviewConfig) -> LayoutResolver {
    LayoutResolver::new(config.layout.pip_position)
}

/// An empty session shaped by the config.
pub fn new_session(config: &MultiviewConfig, is_mobile: bool) -> MultiviewSession {
    let mut session = MultiviewSession::with_layout(layout_resolver(config), layout_engine(config))
        .with_max_streams(config.session.max_streams as usize);
    session.set_layout(config.layout.default_type);
    session.set_mobile(is_mobile);
    session
}

/// Load restored streams into a configured session, pointing Twitch
/// embeds at the configured parent host.
pub fn into_session(
    config: &MultiviewConfig,
    mut restored: RestoredSession,
    is_mobile: bool,
) -> MultiviewSession {
    for stream in &mut restored.streams {
        stream.set_embed_parent(&config.share.embed_parent);
    }
    restored.into_session(new_session(config, is_mobile))
}

/// The session store: on disk when persistence is enabled, otherwise a
/// throwaway in-memory store.
pub fn open_store(config: &MultiviewConfig) -> Result<Box<dyn SessionStore>, MultiviewError> {
    if config.session.persist {
        Ok(Box::new(FileStore::new(paths::session_dir(config)?)))
    } else {
        Ok(Box::new(MemoryStore::new()))
    }
}
