//! IconButton Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::icon::icon;
use crate::domain::settings::DensityScale;
use crate::theme::colors::GalleryColors;
use crate::theme::density;

/// A circular icon button
///
/// The density modifier shrinks the touch target; the glyph size is fixed.
#[derive(IntoElement)]
pub struct IconButton {
    id: ElementId,
    name: IconName,
    density: Option<DensityScale>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl IconButton {
    /// Create a new icon button
    pub fn new(id: impl Into<ElementId>, name: IconName) -> Self {
        Self {
            id: id.into(),
            name,
            density: None,
            on_click: None,
        }
    }

    /// Set the density scale modifier
    pub fn density(mut self, density: Option<DensityScale>) -> Self {
        self.density = density;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for IconButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let touch_size = density::icon_button_size(self.density);

        let mut element = div()
            .id(self.id)
            .size(touch_size)
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .cursor_pointer()
            .child(icon(self.name, px(24.0), GalleryColors::text_secondary()))
            .hover(|s| s.bg(GalleryColors::hover_overlay()));

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
