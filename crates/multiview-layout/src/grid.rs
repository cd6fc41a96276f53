//! Free-form grid items for user-arranged layouts.
//!
//! Items live on a grid `GRID_COLUMNS` units wide and at most
//! `MAX_GRID_ROWS` units tall.
//! A session's grid is ordered like its streams: item `n` places stream `n`.

use serde::{Deserialize, Serialize};

use crate::resolver::Layout;

/// Width of the free-form grid in units.
pub const GRID_COLUMNS: u32 = 12;

/// Height limit of the free-form grid in units.
pub const MAX_GRID_ROWS: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridItem {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl GridItem {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Clamp into the grid: at least one unit in each dimension and never
    /// extending past the right or bottom edge.
    pub fn normalized(self) -> Self {
        let x = self.x.min(GRID_COLUMNS - 1);
        let w = self.w.clamp(1, GRID_COLUMNS - x);
        let y = self.y.min(MAX_GRID_ROWS - 1);
        let h = self.h.clamp(1, MAX_GRID_ROWS - y);
        Self { x, y, w, h }
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    pub fn overlaps(&self, other: &GridItem) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Grid items equivalent to a resolved layout, one per stream.
///
/// Picture-in-picture overlays cannot be expressed as grid cells, so PiP
/// layouts have no grid form.
pub fn default_grid(layout: &Layout, count: usize) -> Option<Vec<GridItem>> {
    if layout.is_pip() {
        return None;
    }
    let cols = layout.cols.max(1);
    let w = GRID_COLUMNS / cols;
    let items = (0..count.min(layout.slots()) as u32)
        .map(|i| GridItem::new((i % cols) * w, i / cols, w, 1))
        .collect();
    Some(items)
}

/// Total rows spanned by a set of items (at least one).
pub fn total_rows(items: &[GridItem]) -> u32 {
    items.iter().map(GridItem::bottom).max().unwrap_or(0).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use multiview_common::LayoutType;

    #[test]
    fn default_grid_for_two_by_two() {
        let layout = resolve(4, false, LayoutType::TwoByTwo);
        let items = default_grid(&layout, 4).unwrap();
        assert_eq!(
            items,
            vec![
                GridItem::new(0, 0, 6, 1),
                GridItem::new(6, 0, 6, 1),
                GridItem::new(0, 1, 6, 1),
                GridItem::new(6, 1, 6, 1),
            ]
        );
    }

    #[test]
    fn default_grid_only_covers_present_streams() {
        let layout = resolve(2, false, LayoutType::ThreeByThree);
        let items = default_grid(&layout, 2).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], GridItem::new(4, 0, 4, 1));
    }

    #[test]
    fn pip_has_no_grid_form() {
        let layout = resolve(2, false, LayoutType::PictureInPicture);
        assert!(default_grid(&layout, 2).is_none());
    }

    #[test]
    fn normalized_clamps_to_grid() {
        assert_eq!(GridItem::new(20, 0, 5, 0).normalized(), GridItem::new(11, 0, 1, 1));
        assert_eq!(GridItem::new(8, 2, 10, 3).normalized(), GridItem::new(8, 2, 4, 3));
        assert_eq!(GridItem::new(0, 0, 0, 2).normalized(), GridItem::new(0, 0, 1, 2));
    }

    #[test]
    fn normalized_bounds_rows() {
        assert_eq!(
            GridItem::new(0, u32::MAX, 6, 1).normalized(),
            GridItem::new(0, MAX_GRID_ROWS - 1, 6, 1)
        );
        assert_eq!(
            GridItem::new(0, 40, 6, u32::MAX).normalized(),
            GridItem::new(0, 40, 6, MAX_GRID_ROWS - 40)
        );
    }

    #[test]
    fn extreme_items_do_not_overflow() {
        let far = GridItem::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(far.bottom(), u32::MAX);
        assert!(!GridItem::new(0, 0, 1, 1).overlaps(&far));
        assert_eq!(total_rows(&[far]), u32::MAX);
    }

    #[test]
    fn overlap_detection() {
        let a = GridItem::new(0, 0, 6, 1);
        let b = GridItem::new(6, 0, 6, 1);
        let c = GridItem::new(3, 0, 6, 2);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn total_rows_of_empty_is_one() {
        assert_eq!(total_rows(&[]), 1);
        assert_eq!(total_rows(&[GridItem::new(0, 2, 1, 3)]), 5);
    }
}
