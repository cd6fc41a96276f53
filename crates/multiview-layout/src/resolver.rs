//! Layout resolution: (stream count, device class, requested type) → grid geometry.
//!
//! Resolution never fails. A requested layout that cannot present the
//! given number of streams silently degrades to `auto`.

use multiview_common::{LayoutType, PipPosition, MAX_STREAMS};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Width-to-height ratio of a single embedded player.
pub const PLAYER_ASPECT: f64 = 16.0 / 9.0;

/// Concrete grid geometry. `layout_type` is never `Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub layout_type: LayoutType,
    pub rows: u32,
    pub cols: u32,
    /// Width-to-height ratio of the whole grid.
    pub aspect_ratio: f64,
    /// Overlay corner when this is a picture-in-picture layout.
    pub pip: Option<PipPosition>,
}

impl Layout {
    fn grid(layout_type: LayoutType, cols: u32, rows: u32) -> Self {
        Self {
            layout_type,
            rows,
            cols,
            aspect_ratio: (cols as f64 * PLAYER_ASPECT) / rows as f64,
            pip: None,
        }
    }

    fn picture_in_picture(position: PipPosition) -> Self {
        Self {
            layout_type: LayoutType::PictureInPicture,
            rows: 1,
            cols: 1,
            aspect_ratio: PLAYER_ASPECT,
            pip: Some(position),
        }
    }

    /// Number of stream slots the geometry offers.
    pub fn slots(&self) -> usize {
        if self.pip.is_some() {
            2
        } else {
            (self.rows * self.cols) as usize
        }
    }

    pub fn is_pip(&self) -> bool {
        self.pip.is_some()
    }
}

/// Resolves requested layouts into geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResolver {
    /// Corner used for picture-in-picture overlays.
    pub pip_position: PipPosition,
}

impl LayoutResolver {
    pub fn new(pip_position: PipPosition) -> Self {
        Self { pip_position }
    }

    pub fn resolve(&self, count: usize, is_mobile: bool, requested: LayoutType) -> Layout {
        let count = count.min(MAX_STREAMS);
        let effective = if requested.supports(count) {
            requested
        } else {
            debug!(
                requested = %requested,
                count,
                "layout unsupported for stream count, falling back to auto"
            );
            LayoutType::Auto
        };

        match effective {
            LayoutType::Auto => auto_layout(count, is_mobile),
            LayoutType::OneByOne => Layout::grid(LayoutType::OneByOne, 1, 1),
            LayoutType::TwoByOne => Layout::grid(LayoutType::TwoByOne, 2, 1),
            LayoutType::OneByTwo => Layout::grid(LayoutType::OneByTwo, 1, 2),
            LayoutType::TwoByTwo => Layout::grid(LayoutType::TwoByTwo, 2, 2),
            LayoutType::ThreeByThree => Layout::grid(LayoutType::ThreeByThree, 3, 3),
            LayoutType::PictureInPicture => Layout::picture_in_picture(self.pip_position),
        }
    }
}

/// Resolve with the default PiP corner.
pub fn resolve(count: usize, is_mobile: bool, requested: LayoutType) -> Layout {
    LayoutResolver::default().resolve(count, is_mobile, requested)
}

fn auto_layout(count: usize, is_mobile: bool) -> Layout {
    match count {
        0 | 1 => Layout::grid(LayoutType::OneByOne, 1, 1),
        // Portrait screens stack the pair instead of shrinking it side by side
        2 if is_mobile => Layout::grid(LayoutType::OneByTwo, 1, 2),
        2 => Layout::grid(LayoutType::TwoByOne, 2, 1),
        3 | 4 => Layout::grid(LayoutType::TwoByTwo, 2, 2),
        _ => Layout::grid(LayoutType::ThreeByThree, 3, 3),
    }
}
