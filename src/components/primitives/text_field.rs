//! TextField Component
//!
//! Presentational text field with floating label, helper line and character
//! counter. Density lowers the box height; the rounded shape raises the
//! corner radius.

use gpui::{
    div, prelude::*, px, App, ElementId, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::icon::icon;
use crate::constants::TEXT_FIELD_WIDTH;
use crate::domain::settings::{DensityScale, Shape};
use crate::theme::colors::GalleryColors;
use crate::theme::density::{self, CornerStyle};
use crate::theme::typography::Typography;

/// A Material-style text field
#[derive(IntoElement)]
pub struct TextField {
    id: ElementId,
    label: SharedString,
    value: Option<SharedString>,
    helper_text: Option<SharedString>,
    character_limit: Option<usize>,
    leading_icon: Option<IconName>,
    trailing_icon: Option<IconName>,
    outlined: bool,
    density: Option<DensityScale>,
    shape: Option<Shape>,
}

impl TextField {
    /// Create a new text field
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: None,
            helper_text: None,
            character_limit: None,
            leading_icon: None,
            trailing_icon: None,
            outlined: false,
            density: None,
            shape: None,
        }
    }

    /// Set the pre-filled value
    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the helper text shown below the field
    pub fn helper_text(mut self, text: impl Into<SharedString>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the character limit shown by the counter
    pub fn character_limit(mut self, limit: usize) -> Self {
        self.character_limit = Some(limit);
        self
    }

    /// Set the leading icon
    pub fn leading_icon(mut self, name: IconName) -> Self {
        self.leading_icon = Some(name);
        self
    }

    /// Set the trailing icon
    pub fn trailing_icon(mut self, name: IconName) -> Self {
        self.trailing_icon = Some(name);
        self
    }

    /// Use the outlined style instead of the filled one
    pub fn outlined(mut self, outlined: bool) -> Self {
        self.outlined = outlined;
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
}

/// Format the `len / limit` character counter
fn character_counter(value: Option<&str>, limit: usize) -> String {
    let length = value.map(str::len).unwrap_or(0);
    format!("{} / {}", length, limit)
}

impl RenderOnce for TextField {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let height = density::text_field_height(self.density);
        let corner = density::corner_style(self.shape);
        let counter = self
            .character_limit
            .map(|limit| character_counter(self.value.as_deref().map(|v| &**v), limit));

        let mut field = div()
            .id(self.id)
            .h(height)
            .px_4()
            .flex()
            .flex_row()
            .items_center()
            .gap_3();

        field = if self.outlined {
            let field = field.border_1().border_color(GalleryColors::outline());
            match corner {
                CornerStyle::Baseline => field.rounded_md(),
                CornerStyle::Pill => field.rounded_lg(),
            }
        } else {
            let field = field
                .bg(GalleryColors::field_fill())
                .border_b_1()
                .border_color(GalleryColors::text_muted());
            match corner {
                CornerStyle::Baseline => field.rounded_t_md(),
                CornerStyle::Pill => field.rounded_t_lg(),
            }
        };

        // Floating label: small above the value when filled, resting in the
        // value slot when empty
        let label_and_value = match &self.value {
            Some(value) => div()
                .flex_1()
                .flex()
                .flex_col()
                .justify_center()
                .child(
                    div()
                        .text_size(px(Typography::FLOATING_LABEL))
                        .text_color(GalleryColors::text_muted())
                        .child(self.label.clone()),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_BASE))
                        .text_color(GalleryColors::text_primary())
                        .text_ellipsis()
                        .child(value.clone()),
                ),
            None => div()
                .flex_1()
                .flex()
                .flex_col()
                .justify_center()
                .child(
                    div()
                        .text_size(px(Typography::TEXT_BASE))
                        .text_color(GalleryColors::text_muted())
                        .child(self.label.clone()),
                ),
        };

        let field = field
            .when_some(self.leading_icon, |el, name| {
                el.child(icon(name, px(20.0), GalleryColors::text_muted()))
            })
            .child(label_and_value)
            .when_some(self.trailing_icon, |el, name| {
                el.child(icon(name, px(20.0), GalleryColors::text_muted()))
            });

        let helper_line = div()
            .px_4()
            .pt_1()
            .flex()
            .flex_row()
            .justify_between()
            .text_size(px(Typography::TEXT_XS))
            .text_color(GalleryColors::text_muted())
            .when_some(self.helper_text, |el, text| el.child(text))
            .when_some(counter, |el, counter| el.child(counter));

        div()
            .w(px(TEXT_FIELD_WIDTH))
            .flex()
            .flex_col()
            .child(field)
            .child(helper_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_counts_value_characters() {
        assert_eq!(character_counter(Some("Pre-filled"), 18), "10 / 18");
    }

    #[test]
    fn counter_treats_absent_value_as_empty() {
        assert_eq!(character_counter(None, 18), "0 / 18");
    }
}
