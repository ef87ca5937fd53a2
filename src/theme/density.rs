//! Density - Component Metrics Under Density and Shape Settings
//!
//! Pure mapping from the settings snapshot to per-component sizing. Each
//! density step below the default removes 4px of height; an absent setting
//! behaves exactly like the baseline.

use gpui::{px, Pixels};

use crate::domain::settings::{DensityScale, Shape};

/// Height removed per density step
const STEP_PX: f32 = 4.0;

/// Baseline heights at the default density
const BUTTON_BASELINE: f32 = 36.0;
const CHIP_BASELINE: f32 = 32.0;
const ICON_BUTTON_BASELINE: f32 = 48.0;
const CHECKBOX_BASELINE: f32 = 40.0;
const TEXT_FIELD_BASELINE: f32 = 56.0;

fn scaled(baseline: f32, density: Option<DensityScale>) -> f32 {
    let step = density.map(DensityScale::step).unwrap_or(0);
    baseline + STEP_PX * step as f32
}

/// Button height
pub fn button_height(density: Option<DensityScale>) -> Pixels {
    px(scaled(BUTTON_BASELINE, density))
}

/// Chip height
pub fn chip_height(density: Option<DensityScale>) -> Pixels {
    px(scaled(CHIP_BASELINE, density))
}

/// Icon button touch-target size (width and height)
pub fn icon_button_size(density: Option<DensityScale>) -> Pixels {
    px(scaled(ICON_BUTTON_BASELINE, density))
}

/// Checkbox touch-target size (width and height)
pub fn checkbox_touch_size(density: Option<DensityScale>) -> Pixels {
    px(scaled(CHECKBOX_BASELINE, density))
}

/// Text field box height
pub fn text_field_height(density: Option<DensityScale>) -> Pixels {
    px(scaled(TEXT_FIELD_BASELINE, density))
}

/// Corner treatment derived from the shape setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerStyle {
    /// Baseline corner radius
    Baseline,
    /// Fully rounded (pill / increased radius)
    Pill,
}

/// Resolve the shape setting; an absent value falls through to the baseline
pub fn corner_style(shape: Option<Shape>) -> CornerStyle {
    match shape {
        Some(Shape::Rounded) => CornerStyle::Pill,
        _ => CornerStyle::Baseline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_density_uses_baselines() {
        let density = Some(DensityScale::Default);
        assert_eq!(button_height(density), px(36.0));
        assert_eq!(chip_height(density), px(32.0));
        assert_eq!(icon_button_size(density), px(48.0));
        assert_eq!(checkbox_touch_size(density), px(40.0));
        assert_eq!(text_field_height(density), px(56.0));
    }

    #[test]
    fn each_step_removes_four_pixels() {
        assert_eq!(button_height(Some(DensityScale::Comfortable)), px(32.0));
        assert_eq!(button_height(Some(DensityScale::Compact)), px(28.0));
        assert_eq!(text_field_height(Some(DensityScale::Comfortable)), px(52.0));
        assert_eq!(text_field_height(Some(DensityScale::Compact)), px(48.0));
        assert_eq!(chip_height(Some(DensityScale::Compact)), px(24.0));
    }

    #[test]
    fn absent_density_behaves_like_baseline() {
        assert_eq!(button_height(None), button_height(Some(DensityScale::Default)));
        assert_eq!(checkbox_touch_size(None), px(40.0));
    }

    #[test]
    fn metrics_are_deterministic() {
        for density in [None, Some(DensityScale::Comfortable), Some(DensityScale::Compact)] {
            assert_eq!(button_height(density), button_height(density));
            assert_eq!(text_field_height(density), text_field_height(density));
        }
    }

    #[test]
    fn absent_shape_is_baseline() {
        assert_eq!(corner_style(None), CornerStyle::Baseline);
        assert_eq!(corner_style(Some(Shape::Default)), CornerStyle::Baseline);
        assert_eq!(corner_style(Some(Shape::Rounded)), CornerStyle::Pill);
    }
}
