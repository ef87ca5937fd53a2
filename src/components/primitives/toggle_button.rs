//! ToggleButton Component
//!
//! Segmented control driving the gallery settings. Each option carries an
//! optional raw value string; the change handler receives the clicked
//! option's value, or `None` when the option has no value attached.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::GalleryColors;
use crate::theme::typography::Typography;

/// A single segment of a toggle button
pub struct ToggleOption {
    label: SharedString,
    value: Option<SharedString>,
    selected: bool,
}

impl ToggleOption {
    /// Create an option with no value attached
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            value: None,
            selected: false,
        }
    }

    /// Attach the raw value this option selects
    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set whether this option is currently selected
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

type ChangeHandler = Rc<dyn Fn(Option<&str>, &mut Window, &mut App) + 'static>;

/// A segmented toggle control
#[derive(IntoElement)]
pub struct ToggleButton {
    id: ElementId,
    options: Vec<ToggleOption>,
    on_change: Option<ChangeHandler>,
}

impl ToggleButton {
    /// Create a new toggle button
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            on_change: None,
        }
    }

    /// Set the options
    pub fn options(mut self, options: Vec<ToggleOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the change handler
    pub fn on_change(
        mut self,
        handler: impl Fn(Option<&str>, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for ToggleButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let count = self.options.len();
        let on_change = self.on_change;

        div()
            .id(self.id)
            .flex()
            .flex_row()
            .border_1()
            .border_color(GalleryColors::outline())
            .rounded_md()
            .overflow_hidden()
            .children(self.options.into_iter().enumerate().map(|(ix, option)| {
                let handler = on_change.clone();
                let value = option.value.clone();

                let (bg_color, text_color) = if option.selected {
                    (GalleryColors::primary(), GalleryColors::on_primary())
                } else {
                    (GalleryColors::surface(), GalleryColors::text_secondary())
                };

                div()
                    .id(("toggle-option", ix))
                    .px_3()
                    .py_1()
                    .bg(bg_color)
                    .text_color(text_color)
                    .text_size(px(Typography::TEXT_SM))
                    .cursor_pointer()
                    .when(ix + 1 < count, |el| {
                        el.border_r_1().border_color(GalleryColors::outline())
                    })
                    .when(!option.selected, |el| {
                        el.hover(|s| s.bg(GalleryColors::hover_overlay()))
                    })
                    .when_some(handler, |el, handler| {
                        el.on_click(move |_event: &ClickEvent, window, cx| {
                            handler(value.as_deref().map(|v| &**v), window, cx);
                        })
                    })
                    .child(option.label)
            }))
    }
}
