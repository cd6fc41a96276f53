//! Core types and constructors for MultiviewSession.

use multiview_common::{LayoutType, Stream, StreamRef, MAX_STREAMS};

use crate::grid::GridItem;
use crate::layout::LayoutEngine;
use crate::resolver::{Layout, LayoutResolver};

/// The state of one multiview page: ordered streams, the requested
/// layout, the device class, an optional free-form grid, and which
/// stream has audio focus.
pub struct MultiviewSession {
    /// Streams in slot order.
    pub(super) streams: Vec<Stream>,
    /// Layout the user asked for. Resolution may degrade it.
    pub(super) requested: LayoutType,
    pub(super) is_mobile: bool,
    /// User-arranged grid, one item per stream.
    pub(super) grid: Option<Vec<GridItem>>,
    pub(super) focused: Option<StreamRef>,
    pub(super) max_streams: usize,
    pub(super) resolver: LayoutResolver,
    pub(super) engine: LayoutEngine,
}

impl MultiviewSession {
    /// Create an empty session using the `auto` layout.
    pub fn new() -> Self {
        Self {
            streams: Vec::new(),
            requested: LayoutType::Auto,
            is_mobile: false,
            grid: None,
            focused: None,
            max_streams: MAX_STREAMS,
            resolver: LayoutResolver::default(),
            engine: LayoutEngine::default(),
        }
    }

    /// Create with custom resolver and engine configuration.
    pub fn with_layout(resolver: LayoutResolver, engine: LayoutEngine) -> Self {
        Self {
            resolver,
            engine,
            ..Self::new()
        }
    }

    /// Limit the number of streams. Clamped to `1..=MAX_STREAMS`.
    pub fn with_max_streams(mut self, max: usize) -> Self {
        self.max_streams = max.clamp(1, MAX_STREAMS);
        self
    }

    // -- Accessors --

    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.streams.len() >= self.max_streams
    }

    pub fn max_streams(&self) -> usize {
        self.max_streams
    }

    pub fn requested_layout(&self) -> LayoutType {
        self.requested
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn grid_layout(&self) -> Option<&[GridItem]> {
        self.grid.as_deref()
    }

    pub fn focused(&self) -> Option<&StreamRef> {
        self.focused.as_ref()
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn contains(&self, key: &StreamRef) -> bool {
        self.position(key).is_some()
    }

    pub fn position(&self, key: &StreamRef) -> Option<usize> {
        self.streams
            .iter()
            .position(|s| s.id == key.id && s.platform == key.platform)
    }

    /// Stream keys in slot order.
    pub fn keys(&self) -> Vec<StreamRef> {
        self.streams.iter().map(Stream::key).collect()
    }

    /// Resolve the current geometry for the stream count and device class.
    pub fn layout(&self) -> Layout {
        self.resolver
            .resolve(self.streams.len(), self.is_mobile, self.requested)
    }
}

impl Default for MultiviewSession {
    fn default() -> Self {
        Self::new()
    }
}
