//! Checkbox Component

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::domain::settings::DensityScale;
use crate::theme::colors::GalleryColors;
use crate::theme::density;
use crate::theme::typography::Typography;

/// A labeled checkbox
///
/// The density modifier shrinks the touch target; the box itself is fixed.
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    density: Option<DensityScale>,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            density: None,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the density scale modifier
    pub fn density(mut self, density: Option<DensityScale>) -> Self {
        self.density = density;
        self
    }

    /// Set the change handler
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let touch_size = density::checkbox_touch_size(self.density);

        let (box_bg, border_color) = if checked {
            (GalleryColors::primary(), GalleryColors::primary())
        } else {
            (GalleryColors::surface(), GalleryColors::text_muted())
        };

        let check_mark = if checked { "✓" } else { "" };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .cursor_pointer()
            .child(
                div()
                    .size(touch_size)
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_full()
                    .hover(|s| s.bg(GalleryColors::hover_overlay()))
                    .child(
                        div()
                            .size(px(18.0))
                            .rounded_sm()
                            .border_2()
                            .border_color(border_color)
                            .bg(box_bg)
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(GalleryColors::on_primary())
                            .text_size(px(12.0))
                            .child(check_mark),
                    ),
            );

        if let Some(label) = self.label {
            checkbox = checkbox.child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(GalleryColors::text_primary())
                    .child(label),
            );
        }

        if let Some(handler) = self.on_change {
            checkbox = checkbox.on_click(move |_event, window, cx| {
                handler(!checked, window, cx);
            });
        }

        checkbox
    }
}
