//! Layout engine types and configuration.

/// Configuration for the layout engine that computes player positions.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    /// Gap in pixels between grid cells.
    pub gap: u32,
    /// Outer padding in pixels around the entire grid.
    pub outer_padding: u32,
    /// Width of the PiP overlay as a fraction of the grid width.
    pub pip_scale: f64,
    /// Inset of the PiP overlay from the grid edge, in pixels.
    pub pip_margin: u32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gap: 4,
            outer_padding: 0,
            pip_scale: 0.3,
            pip_margin: 16,
        }
    }
}
