//! Layout configuration validation (gap, padding, PiP overlay, breakpoint).

use crate::schema::MultiviewConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &MultiviewConfig) {
    validate_range(errors, "layout.gap", config.layout.gap, 0, 64);
    validate_range(
        errors,
        "layout.outer_padding",
        config.layout.outer_padding,
        0,
        128,
    );
    validate_range_f64(errors, "layout.pip_scale", config.layout.pip_scale, 0.1, 0.6);
    validate_range(errors, "layout.pip_margin", config.layout.pip_margin, 0, 128);
    validate_range(
        errors,
        "layout.mobile_breakpoint",
        config.layout.mobile_breakpoint,
        320,
        2048,
    );
}
