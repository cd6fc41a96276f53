//! Rebuilding full streams from compact state.

use std::collections::HashMap;

use multiview_common::{LayoutType, Platform, Stream, StreamRef};
use multiview_layout::{GridItem, MultiviewSession};
use tracing::debug;

use crate::compact::CompactState;

/// Resolves stream keys to full stream entities (titles, links).
pub trait StreamLookup {
    fn lookup(&self, key: &StreamRef) -> Option<Stream>;
}

impl StreamLookup for [Stream] {
    fn lookup(&self, key: &StreamRef) -> Option<Stream> {
        self.iter()
            .find(|s| s.id == key.id && s.platform == key.platform)
            .cloned()
    }
}

impl StreamLookup for Vec<Stream> {
    fn lookup(&self, key: &StreamRef) -> Option<Stream> {
        self.as_slice().lookup(key)
    }
}

impl StreamLookup for HashMap<StreamRef, Stream> {
    fn lookup(&self, key: &StreamRef) -> Option<Stream> {
        self.get(key).cloned()
    }
}

/// A lookup that knows no streams; every id becomes a placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl StreamLookup for NoLookup {
    fn lookup(&self, _key: &StreamRef) -> Option<Stream> {
        None
    }
}

/// Compact state expanded back into streams.
#[derive(Debug, Clone, PartialEq)]
pub struct RestoredSession {
    pub streams: Vec<Stream>,
    pub layout: LayoutType,
    pub grid_layout: Option<Vec<GridItem>>,
    /// How many streams were synthesized because the lookup missed.
    pub placeholders: usize,
}

impl RestoredSession {
    pub fn from_streams(streams: Vec<Stream>, layout: LayoutType) -> Self {
        Self {
            streams,
            layout,
            grid_layout: None,
            placeholders: 0,
        }
    }

    /// Load into `session`, replacing its streams and layout.
    ///
    /// Streams past the session limit or duplicated are dropped; when that
    /// happens the grid no longer lines up and is dropped too.
    pub fn into_session(self, mut session: MultiviewSession) -> MultiviewSession {
        session.clear();
        session.set_layout(self.layout);
        for stream in self.streams {
            session.add_stream(stream);
        }
        if let Some(grid) = self.grid_layout {
            if !session.set_grid_layout(grid) {
                debug!("restored grid does not match restored streams, dropping it");
            }
        }
        session
    }
}

/// Expand compact state, synthesizing placeholders for unknown ids.
pub fn restore<L: StreamLookup + ?Sized>(state: CompactState, lookup: &L) -> RestoredSession {
    let grid_layout = state
        .grid_items()
        .filter(|items| items.len() == state.streams.len());

    let mut placeholders = 0;
    let streams = state
        .streams
        .into_iter()
        .map(|compact| {
            lookup.lookup(&compact.key()).unwrap_or_else(|| {
                placeholders += 1;
                let channel_id = compact.channel_id.clone().or_else(|| {
                    matches!(compact.platform, Platform::Twitch | Platform::TwitCasting)
                        .then(|| compact.id.clone())
                });
                Stream::placeholder(compact.id, compact.platform, channel_id)
            })
        })
        .collect();

    RestoredSession {
        streams,
        layout: state.layout,
        grid_layout,
        placeholders,
    }
}
