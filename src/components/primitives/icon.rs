//! Icon Component

use gpui::{svg, Pixels, Rgba, Styled, Svg};

use crate::assets::IconName;

/// Render an embedded icon glyph at the given size
pub fn icon(name: IconName, size: Pixels, color: Rgba) -> Svg {
    svg().path(name.path()).size(size).text_color(color)
}
