//! Compact session state.
//!
//! Field names are single letters because the whole object travels in a
//! URL. Grid cells are trimmed to `[x, y, w, h]` in stream order.

use multiview_common::{LayoutType, Platform, Stream, StreamRef};
use multiview_layout::{GridItem, MultiviewSession};
use serde::{Deserialize, Serialize};

/// Schema version of [`CompactState`]. Any other version is discarded.
pub const STATE_VERSION: u32 = 1;

/// `[x, y, w, h]` of one grid item.
pub type GridCell = [u32; 4];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactStream {
    #[serde(rename = "i")]
    pub id: String,
    #[serde(rename = "p")]
    pub platform: Platform,
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl CompactStream {
    pub fn key(&self) -> StreamRef {
        StreamRef::new(self.id.clone(), self.platform)
    }
}

impl From<&Stream> for CompactStream {
    fn from(stream: &Stream) -> Self {
        // Twitch and TwitCasting channel ids equal the stream id; skip the repeat
        let channel_id = stream
            .channel_id
            .as_ref()
            .filter(|c| c.as_str() != stream.id)
            .cloned();
        Self {
            id: stream.id.clone(),
            platform: stream.platform,
            channel_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactState {
    #[serde(rename = "v", default)]
    pub version: u32,
    #[serde(rename = "s", default)]
    pub streams: Vec<CompactStream>,
    #[serde(rename = "l", default)]
    pub layout: LayoutType,
    #[serde(rename = "g", default, skip_serializing_if = "Option::is_none")]
    pub grid_layout: Option<Vec<GridCell>>,
}

impl CompactState {
    pub fn new(streams: Vec<CompactStream>, layout: LayoutType) -> Self {
        Self {
            version: STATE_VERSION,
            streams,
            layout,
            grid_layout: None,
        }
    }

    /// Capture the shareable part of a session.
    pub fn from_session(session: &MultiviewSession) -> Self {
        Self {
            version: STATE_VERSION,
            streams: session.streams().iter().map(CompactStream::from).collect(),
            layout: session.requested_layout(),
            grid_layout: session
                .grid_layout()
                .map(|items| items.iter().map(|g| [g.x, g.y, g.w, g.h]).collect()),
        }
    }

    pub fn is_current(&self) -> bool {
        self.version == STATE_VERSION
    }

    /// Grid cells as layout items.
    pub fn grid_items(&self) -> Option<Vec<GridItem>> {
        self.grid_layout.as_ref().map(|cells| {
            cells
                .iter()
                .map(|[x, y, w, h]| GridItem::new(*x, *y, *w, *h))
                .collect()
        })
    }
}
