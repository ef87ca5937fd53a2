//! Chip Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::icon::icon;
use crate::domain::settings::DensityScale;
use crate::theme::colors::GalleryColors;
use crate::theme::density;
use crate::theme::typography::Typography;

/// A Material-style action chip
///
/// Chips are always pill-shaped; only the density modifier applies.
#[derive(IntoElement)]
pub struct Chip {
    id: ElementId,
    label: SharedString,
    leading_icon: Option<IconName>,
    density: Option<DensityScale>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Chip {
    /// Create a new chip
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            leading_icon: None,
            density: None,
            on_click: None,
        }
    }

    /// Set the leading icon
    pub fn leading_icon(mut self, name: IconName) -> Self {
        self.leading_icon = Some(name);
        self
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

impl RenderOnce for Chip {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let height = density::chip_height(self.density);

        let mut element = div()
            .id(self.id)
            .h(height)
            .px_3()
            .flex()
            .items_center()
            .gap_2()
            .bg(GalleryColors::chip_bg())
            .rounded_full()
            .text_color(GalleryColors::text_primary())
            .text_size(px(Typography::LABEL))
            .cursor_pointer()
            .when_some(self.leading_icon, |el, name| {
                el.child(icon(name, px(18.0), GalleryColors::text_secondary()))
            })
            .child(self.label)
            .hover(|s| s.bg(GalleryColors::chip_bg_hover()));

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
