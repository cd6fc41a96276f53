//! Layout calculation: geometry or grid items to per-slot rects.

use multiview_common::{PipPosition, Rect};

use super::LayoutEngine;
use crate::grid::{total_rows, GridItem, GRID_COLUMNS};
use crate::resolver::{Layout, PLAYER_ASPECT};

impl LayoutEngine {
    /// Compute a rect for each of the first `count` slots of `layout`.
    ///
    /// Slots beyond what the layout offers are not returned.
    pub fn compute(&self, layout: &Layout, count: usize, viewport: Rect) -> Vec<(usize, Rect)> {
        let bounds = viewport.inset(self.outer_padding as f64);
        let count = count.min(layout.slots());
        match layout.pip {
            Some(position) => self.layout_pip(position, count, bounds),
            None => self.layout_cells(layout.cols, layout.rows, count, bounds),
        }
    }

    /// Compute rects for free-form grid items, in item order.
    pub fn compute_grid(&self, items: &[GridItem], viewport: Rect) -> Vec<(usize, Rect)> {
        let bounds = viewport.inset(self.outer_padding as f64);
        let gap = self.gap as f64;
        let items: Vec<GridItem> = items.iter().map(|item| item.normalized()).collect();
        let rows = total_rows(&items) as f64;
        // One unit includes its trailing gap; the last gap falls outside the bounds.
        let unit_w = (bounds.width + gap) / GRID_COLUMNS as f64;
        let unit_h = (bounds.height + gap) / rows;

        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let rect = Rect {
                    x: bounds.x + item.x as f64 * unit_w,
                    y: bounds.y + item.y as f64 * unit_h,
                    width: (item.w as f64 * unit_w - gap).max(0.0),
                    height: (item.h as f64 * unit_h - gap).max(0.0),
                };
                (i, rect)
            })
            .collect()
    }

    fn layout_cells(&self, cols: u32, rows: u32, count: usize, bounds: Rect) -> Vec<(usize, Rect)> {
        let gap = self.gap as f64;
        let cols = cols.max(1);
        let rows = rows.max(1);
        let cell_w = ((bounds.width - gap * (cols - 1) as f64) / cols as f64).max(0.0);
        let cell_h = ((bounds.height - gap * (rows - 1) as f64) / rows as f64).max(0.0);

        (0..count)
            .map(|slot| {
                let col = (slot as u32 % cols) as f64;
                let row = (slot as u32 / cols) as f64;
                let rect = Rect {
                    x: bounds.x + col * (cell_w + gap),
                    y: bounds.y + row * (cell_h + gap),
                    width: cell_w,
                    height: cell_h,
                };
                (slot, rect)
            })
            .collect()
    }

    fn layout_pip(&self, position: PipPosition, count: usize, bounds: Rect) -> Vec<(usize, Rect)> {
        let mut out = Vec::with_capacity(count);
        if count == 0 {
            return out;
        }
        out.push((0, bounds));
        if count < 2 {
            return out;
        }

        let margin = self.pip_margin as f64;
        let width = (bounds.width * self.pip_scale).min((bounds.width - margin * 2.0).max(0.0));
        let height = (width / PLAYER_ASPECT).min((bounds.height - margin * 2.0).max(0.0));

        let left = bounds.x + margin;
        let right = (bounds.x + bounds.width - margin - width).max(bounds.x);
        let top = bounds.y + margin;
        let bottom = (bounds.y + bounds.height - margin - height).max(bounds.y);

        let (x, y) = match position {
            PipPosition::TopLeft => (left, top),
            PipPosition::TopRight => (right, top),
            PipPosition::BottomLeft => (left, bottom),
            PipPosition::BottomRight => (right, bottom),
        };
        out.push((
            1,
            Rect {
                x,
                y,
                width,
                height,
            },
        ));
        out
    }
}
