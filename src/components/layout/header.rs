//! Header Component
//!
//! The title block with the logo and subtitle, plus the control row with
//! the density scale and shape toggles.

use gpui::{
    div, prelude::*, px, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::toggle_button::{ToggleButton, ToggleOption};
use crate::constants::PAGE_PADDING_X;
use crate::domain::settings::{DensityScale, Settings, Shape};
use crate::features::gallery::controller::GalleryController;
use crate::theme::colors::GalleryColors;
use crate::theme::typography::Typography;

/// Header component
pub struct Header {
    entities: AppEntities,
    controller: GalleryController,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe settings so the toggles reflect the current selection
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        let controller = GalleryController::new(entities.clone());
        Self {
            entities,
            controller,
        }
    }

    fn density_scale_controls(&self, settings: Settings) -> impl IntoElement {
        let controller = self.controller.clone();

        control(
            "Density scale",
            ToggleButton::new("density-scale-toggle")
                .options(
                    DensityScale::ALL
                        .iter()
                        .map(|scale| {
                            ToggleOption::new(scale.label())
                                .value(scale.value())
                                .selected(settings.density_scale == Some(*scale))
                        })
                        .collect(),
                )
                .on_change(move |value, _window, cx| {
                    controller.set_density_scale(value, cx);
                }),
        )
    }

    fn shape_controls(&self, settings: Settings) -> impl IntoElement {
        let controller = self.controller.clone();

        control(
            "Shape",
            ToggleButton::new("shape-toggle")
                .options(
                    Shape::ALL
                        .iter()
                        .map(|shape| {
                            ToggleOption::new(shape.label())
                                .value(shape.value())
                                .selected(settings.shape == Some(*shape))
                        })
                        .collect(),
                )
                .on_change(move |value, _window, cx| {
                    controller.set_shape(value, cx);
                }),
        )
    }
}

/// A labeled control block
fn control(label: &'static str, toggle: ToggleButton) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap_1()
        .child(
            div()
                .text_size(px(Typography::TEXT_XS))
                .text_color(GalleryColors::text_secondary())
                .child(label),
        )
        .child(toggle)
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = self.entities.settings.read(cx).get();

        div()
            .w_full()
            .px(px(PAGE_PADDING_X))
            .py_4()
            .flex()
            .flex_col()
            .gap_4()
            // Logo, title and subtitle
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(40.0))
                            .rounded_md()
                            .bg(GalleryColors::primary())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(GalleryColors::on_primary())
                            .font_weight(FontWeight::BOLD)
                            .child("M"),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_2XL))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(GalleryColors::text_primary())
                                    .child("Material Density"),
                            )
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_SM))
                                    .text_color(GalleryColors::text_secondary())
                                    .child(
                                        "Material Design uses low-density space by default, \
                                         with large tap targets and margins, and offers \
                                         high-density space when it improves the user \
                                         experience.",
                                    ),
                            ),
                    ),
            )
            // Control row
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_6()
                    .child(self.density_scale_controls(settings))
                    .child(self.shape_controls(settings)),
            )
    }
}
