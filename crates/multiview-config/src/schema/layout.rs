//! Multiview grid layout configuration.

use multiview_common::{LayoutType, PipPosition};
use serde::{Deserialize, Serialize};

/// Grid geometry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Layout used for new sessions.
    pub default_type: LayoutType,
    /// Gap between grid cells in pixels (valid range: 0-64).
    pub gap: u32,
    /// Padding around the whole grid in pixels (valid range: 0-128).
    pub outer_padding: u32,
    /// Corner the picture-in-picture overlay is anchored to.
    pub pip_position: PipPosition,
    /// PiP overlay width as a fraction of the viewport (valid range: 0.1-0.6).
    pub pip_scale: f64,
    /// Inset of the PiP overlay from the viewport edge, in pixels (valid range: 0-128).
    pub pip_margin: u32,
    /// Viewports narrower than this are treated as mobile (valid range: 320-2048).
    pub mobile_breakpoint: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_type: LayoutType::Auto,
            gap: 4,
            outer_padding: 0,
            pip_position: PipPosition::BottomRight,
            pip_scale: 0.3,
            pip_margin: 16,
            mobile_breakpoint: 768,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.default_type, LayoutType::Auto);
        assert_eq!(config.gap, 4);
        assert_eq!(config.outer_padding, 0);
        assert!((config.pip_scale - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.pip_margin, 16);
        assert_eq!(config.mobile_breakpoint, 768);
    }

    #[test]
    fn layout_config_partial_toml() {
        let toml_str = r#"
gap = 0
pip_scale = 0.25
"#;
        let config: LayoutConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gap, 0);
        assert!((config.pip_scale - 0.25).abs() < f64::EPSILON);
        // Defaults preserved
        assert_eq!(config.pip_position, PipPosition::BottomRight);
        assert_eq!(config.mobile_breakpoint, 768);
    }
}
