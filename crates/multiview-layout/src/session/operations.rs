//! Add, remove, reorder, layout, and focus operations on MultiviewSession.

use multiview_common::{LayoutType, Rect, Stream, StreamRef};
use tracing::debug;

use crate::commands::MultiviewCommand;
use crate::grid::{total_rows, GridItem, GRID_COLUMNS, MAX_GRID_ROWS};

use super::MultiviewSession;

impl MultiviewSession {
    /// Append a stream. Rejects duplicates and streams beyond the limit.
    pub fn add_stream(&mut self, stream: Stream) -> bool {
        let key = stream.key();
        if self.contains(&key) {
            debug!(stream = %key, "stream already in session");
            return false;
        }
        if self.is_full() {
            debug!(stream = %key, max = self.max_streams, "session full");
            return false;
        }

        if let Some(grid) = self.grid.as_mut() {
            let y = if grid.is_empty() {
                0
            } else {
                total_rows(grid).min(MAX_GRID_ROWS - 1)
            };
            grid.push(GridItem::new(0, y, GRID_COLUMNS / 2, 1));
        }
        self.streams.push(stream);
        if self.focused.is_none() {
            self.focused = Some(key);
        }
        true
    }

    /// Remove a stream. Any user-arranged grid is dropped so the layout
    /// is re-resolved for the new count.
    pub fn remove_stream(&mut self, key: &StreamRef) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };
        self.streams.remove(index);
        self.grid = None;

        if self.focused.as_ref() == Some(key) {
            self.focused = self
                .streams
                .get(index)
                .or_else(|| self.streams.last())
                .map(Stream::key);
        }
        true
    }

    /// Exchange the streams in two slots. Grid positions stay with the slot.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.streams.len() || b >= self.streams.len() {
            return false;
        }
        self.streams.swap(a, b);
        true
    }

    /// Move a stream to slot 0, the main player in picture-in-picture.
    pub fn promote(&mut self, key: &StreamRef) -> bool {
        match self.position(key) {
            Some(0) | None => false,
            Some(index) => {
                let stream = self.streams.remove(index);
                self.streams.insert(0, stream);
                true
            }
        }
    }

    /// Change the requested layout. Clears any user-arranged grid.
    pub fn set_layout(&mut self, layout: LayoutType) -> bool {
        if self.requested == layout && self.grid.is_none() {
            return false;
        }
        self.requested = layout;
        self.grid = None;
        true
    }

    pub fn set_mobile(&mut self, is_mobile: bool) -> bool {
        if self.is_mobile == is_mobile {
            return false;
        }
        self.is_mobile = is_mobile;
        true
    }

    /// Install a user-arranged grid. Must have one item per stream.
    pub fn set_grid_layout(&mut self, items: Vec<GridItem>) -> bool {
        if items.len() != self.streams.len() {
            debug!(
                items = items.len(),
                streams = self.streams.len(),
                "grid layout rejected: length mismatch"
            );
            return false;
        }
        self.grid = Some(items.into_iter().map(GridItem::normalized).collect());
        true
    }

    pub fn reset_grid(&mut self) -> bool {
        self.grid.take().is_some()
    }

    pub fn clear(&mut self) -> bool {
        if self.streams.is_empty() && self.grid.is_none() {
            return false;
        }
        self.streams.clear();
        self.grid = None;
        self.focused = None;
        true
    }

    // -- Focus --

    pub fn focus(&mut self, key: &StreamRef) -> bool {
        if !self.contains(key) {
            return false;
        }
        self.focused = Some(key.clone());
        true
    }

    pub fn focus_next(&mut self) -> bool {
        self.cycle_focus(1)
    }

    pub fn focus_prev(&mut self) -> bool {
        self.cycle_focus(-1)
    }

    fn cycle_focus(&mut self, step: isize) -> bool {
        let len = self.streams.len();
        if len < 2 {
            return false;
        }
        let current = self
            .focused
            .as_ref()
            .and_then(|k| self.position(k))
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len as isize) as usize;
        self.focused = Some(self.streams[next].key());
        true
    }

    // -- Layout --

    /// Pixel rects for every visible stream.
    pub fn compute_layout(&self, viewport: Rect) -> Vec<(StreamRef, Rect)> {
        let slots = match &self.grid {
            Some(items) => self.engine.compute_grid(items, viewport),
            None => self
                .engine
                .compute(&self.layout(), self.streams.len(), viewport),
        };
        slots
            .into_iter()
            .filter_map(|(slot, rect)| self.streams.get(slot).map(|s| (s.key(), rect)))
            .collect()
    }

    /// Dispatch a command. Returns whether the session changed.
    pub fn execute(&mut self, cmd: MultiviewCommand) -> bool {
        match cmd {
            MultiviewCommand::Add(stream) => self.add_stream(stream),
            MultiviewCommand::Remove(key) => self.remove_stream(&key),
            MultiviewCommand::Swap(a, b) => self.swap(a, b),
            MultiviewCommand::Promote(key) => self.promote(&key),
            MultiviewCommand::SetLayout(layout) => self.set_layout(layout),
            MultiviewCommand::SetMobile(mobile) => self.set_mobile(mobile),
            MultiviewCommand::FocusNext => self.focus_next(),
            MultiviewCommand::FocusPrev => self.focus_prev(),
            MultiviewCommand::ResetGrid => self.reset_grid(),
            MultiviewCommand::Clear => self.clear(),
        }
    }
}
