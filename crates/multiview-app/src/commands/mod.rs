//! Subcommand handlers. Each returns the JSON document printed on stdout.

pub mod layout;
pub mod open;
pub mod player;
pub mod schedule;
pub mod session;
pub mod share;

use multiview_common::{LayoutType, Rect, Stream, StreamRef};
use multiview_config::MultiviewConfig;
use multiview_layout::{GridItem, Layout, MultiviewSession};
use serde::Serialize;

use crate::cli::Viewport;

#[derive(Debug, Serialize)]
pub struct PlacedStream {
    pub stream: StreamRef,
    pub rect: Rect,
}

/// A session as printed by `open` and `session show`.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub requested: LayoutType,
    pub layout: Layout,
    pub streams: Vec<Stream>,
    pub placements: Vec<PlacedStream>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_layout: Option<Vec<GridItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused: Option<StreamRef>,
}

impl SessionView {
    pub fn new(session: &MultiviewSession, viewport: Rect) -> Self {
        Self {
            requested: session.requested_layout(),
            layout: session.layout(),
            streams: session.streams().to_vec(),
            placements: session
                .compute_layout(viewport)
                .into_iter()
                .map(|(stream, rect)| PlacedStream { stream, rect })
                .collect(),
            grid_layout: session.grid_layout().map(<[GridItem]>::to_vec),
            focused: session.focused().cloned(),
        }
    }
}

impl Viewport {
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Mobile when forced by flag or narrower than the configured breakpoint.
    pub fn is_mobile(&self, config: &MultiviewConfig) -> bool {
        self.mobile || self.width < config.layout.mobile_breakpoint
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> multiview_common::Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| multiview_common::MultiviewError::Other(e.to_string()))
}
