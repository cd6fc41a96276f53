mod calculation;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{default_grid, GridItem};
    use crate::resolver::{resolve, LayoutResolver};
    use multiview_common::{LayoutType, PipPosition, Rect};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    fn engine(gap: u32) -> LayoutEngine {
        LayoutEngine {
            gap,
            ..LayoutEngine::default()
        }
    }

    #[test]
    fn single_stream_fills_viewport() {
        let layout = resolve(1, false, LayoutType::Auto);
        let viewport = Rect::new(0.0, 0.0, 800.0, 450.0);
        let result = engine(0).compute(&layout, 1, viewport);
        assert_eq!(result, vec![(0, viewport)]);
    }

    #[test]
    fn side_by_side_divides_width() {
        let layout = resolve(2, false, LayoutType::TwoByOne);
        let result = engine(0).compute(&layout, 2, Rect::new(0.0, 0.0, 1920.0, 1080.0));
        assert_eq!(result.len(), 2);
        assert!(approx(result[0].1.width, 960.0));
        assert!(approx(result[1].1.x, 960.0));
        assert!(approx(result[1].1.height, 1080.0));
    }

    #[test]
    fn gap_is_applied_between_cells() {
        let layout = resolve(4, false, LayoutType::TwoByTwo);
        let result = engine(10).compute(&layout, 4, Rect::new(0.0, 0.0, 1000.0, 500.0));
        assert_eq!(result.len(), 4);
        let (_, last) = result[3];
        assert!(approx(last.width, 495.0));
        assert!(approx(last.height, 245.0));
        assert!(approx(last.x, 505.0));
        assert!(approx(last.y, 255.0));
    }

    #[test]
    fn only_present_streams_get_slots() {
        let layout = resolve(2, false, LayoutType::ThreeByThree);
        let result = engine(0).compute(&layout, 2, Rect::new(0.0, 0.0, 900.0, 900.0));
        assert_eq!(result.len(), 2);
        assert!(approx(result[1].1.x, 300.0));
    }

    #[test]
    fn outer_padding_shrinks_bounds() {
        let layout = resolve(1, false, LayoutType::Auto);
        let eng = LayoutEngine {
            gap: 0,
            outer_padding: 20,
            ..LayoutEngine::default()
        };
        let result = eng.compute(&layout, 1, Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(result[0].1, Rect::new(20.0, 20.0, 760.0, 560.0));
    }

    #[test]
    fn pip_overlay_in_bottom_right() {
        let layout = resolve(2, false, LayoutType::PictureInPicture);
        let eng = LayoutEngine {
            gap: 0,
            outer_padding: 0,
            pip_scale: 0.25,
            pip_margin: 16,
        };
        let viewport = Rect::new(0.0, 0.0, 1600.0, 900.0);
        let result = eng.compute(&layout, 2, viewport);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], (0, viewport));
        let (slot, overlay) = result[1];
        assert_eq!(slot, 1);
        assert!(approx(overlay.width, 400.0));
        assert!(approx(overlay.height, 225.0));
        assert!(approx(overlay.x, 1184.0));
        assert!(approx(overlay.y, 659.0));
    }

    #[test]
    fn pip_overlay_in_top_left() {
        let layout = LayoutResolver::new(PipPosition::TopLeft).resolve(
            2,
            false,
            LayoutType::PictureInPicture,
        );
        let result = LayoutEngine::default().compute(&layout, 2, Rect::new(0.0, 0.0, 1600.0, 900.0));
        let (_, overlay) = result[1];
        assert!(approx(overlay.x, 16.0));
        assert!(approx(overlay.y, 16.0));
    }

    #[test]
    fn default_grid_matches_cell_layout() {
        let layout = resolve(4, false, LayoutType::TwoByTwo);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 500.0);
        let eng = engine(10);
        let cells = eng.compute(&layout, 4, viewport);
        let items = default_grid(&layout, 4).unwrap();
        let grid = eng.compute_grid(&items, viewport);
        assert_eq!(cells.len(), grid.len());
        for ((_, a), (_, b)) in cells.iter().zip(grid.iter()) {
            assert!(approx(a.x, b.x) && approx(a.y, b.y));
            assert!(approx(a.width, b.width) && approx(a.height, b.height));
        }
    }

    #[test]
    fn custom_grid_item_spans_units() {
        // One large player on the left, two stacked on the right
        let items = vec![
            GridItem::new(0, 0, 8, 2),
            GridItem::new(8, 0, 4, 1),
            GridItem::new(8, 1, 4, 1),
        ];
        let result = engine(0).compute_grid(&items, Rect::new(0.0, 0.0, 1200.0, 600.0));
        assert!(approx(result[0].1.width, 800.0));
        assert!(approx(result[0].1.height, 600.0));
        assert!(approx(result[2].1.x, 800.0));
        assert!(approx(result[2].1.y, 300.0));
    }

    #[test]
    fn zero_height_bottom_item_stays_inside_viewport() {
        let items = vec![GridItem::new(0, 0, 12, 1), GridItem::new(0, 1, 12, 0)];
        let viewport = Rect::new(0.0, 0.0, 1200.0, 600.0);
        let result = engine(0).compute_grid(&items, viewport);
        assert!(approx(result[0].1.height, 300.0));
        assert!(approx(result[1].1.y, 300.0));
        assert!(approx(result[1].1.y + result[1].1.height, 600.0));
    }
}
