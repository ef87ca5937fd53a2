//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::icon::icon;
use crate::domain::settings::{DensityScale, Shape};
use crate::theme::colors::GalleryColors;
use crate::theme::density::{self, CornerStyle};
use crate::theme::typography::Typography;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled button without elevation
    Unelevated,
    /// Filled button with elevation (default)
    #[default]
    Raised,
    /// Transparent button with an outline
    Outlined,
}

/// A Material-style button
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    leading_icon: Option<IconName>,
    variant: ButtonVariant,
    density: Option<DensityScale>,
    shape: Option<Shape>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            leading_icon: None,
            variant: ButtonVariant::Raised,
            density: None,
            shape: None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
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

    /// Set the corner shape modifier
    pub fn shape(mut self, shape: Option<Shape>) -> Self {
        self.shape = shape;
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

    /// Create an unelevated button
    pub fn unelevated(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Unelevated)
    }

    /// Create a raised button
    pub fn raised(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Raised)
    }

    /// Create an outlined button
    pub fn outlined(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outlined)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let height = density::button_height(self.density);
        let outlined = self.variant == ButtonVariant::Outlined;

        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Unelevated | ButtonVariant::Raised => (
                GalleryColors::primary(),
                GalleryColors::on_primary(),
                GalleryColors::primary_dark(),
            ),
            ButtonVariant::Outlined => (
                gpui::rgba(0x00000000),
                GalleryColors::primary(),
                GalleryColors::primary_hover_overlay(),
            ),
        };

        let label = SharedString::from(self.label.to_uppercase());

        let mut element = div()
            .id(self.id)
            .h(height)
            .px_4()
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(Typography::LABEL))
            .font_weight(FontWeight::MEDIUM)
            .cursor_pointer()
            .when(outlined, |el| {
                el.border_1().border_color(GalleryColors::outline())
            })
            .when(self.variant == ButtonVariant::Raised, |el| el.shadow_md())
            .when_some(self.leading_icon, |el, name| {
                el.child(icon(name, px(18.0), text_color))
            })
            .child(label)
            .hover(move |s| s.bg(hover_bg));

        element = match density::corner_style(self.shape) {
            CornerStyle::Baseline => element.rounded_md(),
            CornerStyle::Pill => element.rounded_full(),
        };

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
