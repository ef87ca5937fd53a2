//! Colors - Gallery Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Material-style color palette - All colors are accessed via associated
/// functions
pub struct GalleryColors;

impl GalleryColors {
    // Primary colors
    /// Primary accent - Material purple
    pub fn primary() -> Rgba { rgb(0x6200ee) }
    /// Text/icons on primary surfaces
    pub fn on_primary() -> Rgba { rgb(0xffffff) }
    /// Primary pressed/hovered
    pub fn primary_dark() -> Rgba { rgb(0x3700b3) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xfafafa) }
    /// Component surface background
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Filled text field background
    pub fn field_fill() -> Rgba { rgb(0xf0f0f0) }
    /// Chip background
    pub fn chip_bg() -> Rgba { rgb(0xe0e0e0) }
    /// Chip hovered
    pub fn chip_bg_hover() -> Rgba { rgb(0xd5d5d5) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x212121) }
    /// Secondary text (section titles, helper lines)
    pub fn text_secondary() -> Rgba { rgb(0x5f6368) }
    /// Placeholder and resting label text
    pub fn text_muted() -> Rgba { rgb(0x757575) }

    // Border colors
    /// Outline of outlined components
    pub fn outline() -> Rgba { rgb(0x9e9e9e) }
    /// Divider between page regions
    pub fn divider() -> Rgba { rgb(0xe0e0e0) }

    // Overlays
    /// Hover overlay on transparent surfaces
    pub fn hover_overlay() -> Rgba { rgba(0x0000000f) }
    /// Hover overlay on primary surfaces
    pub fn primary_hover_overlay() -> Rgba { rgba(0x6200ee14) }
}
