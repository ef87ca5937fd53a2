//! Gallery Page
//!
//! The component columns. Every section is rebuilt from the current
//! settings snapshot whenever the settings entity notifies.

use gpui::{
    div, prelude::*, px, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::assets::IconName;
use crate::components::primitives::button::Button;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::chip::Chip;
use crate::components::primitives::icon_button::IconButton;
use crate::components::primitives::text_field::TextField;
use crate::constants::PAGE_PADDING_X;
use crate::domain::settings::Settings;
use crate::theme::colors::GalleryColors;
use crate::theme::typography::Typography;

/// Gallery page component
pub struct GalleryPage {
    entities: AppEntities,
}

impl GalleryPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Re-render the whole gallery on every settings change
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for GalleryPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = self.entities.settings.read(cx).get();

        div()
            .id("gallery")
            .flex_1()
            .overflow_y_scroll()
            .px(px(PAGE_PADDING_X))
            .py_4()
            .flex()
            .flex_row()
            .gap_6()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(button_section(settings))
                    .child(chip_section(settings))
                    .child(icon_button_section(settings))
                    .child(checkbox_section(settings)),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(text_field_section(settings)),
            )
    }
}

/// A titled showcase section
fn section(title: &'static str, body: impl IntoElement) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap_3()
        .child(
            div()
                .text_size(px(Typography::TEXT_SM))
                .font_weight(FontWeight::MEDIUM)
                .text_color(GalleryColors::text_secondary())
                .child(title),
        )
        .child(body)
}

fn button_section(settings: Settings) -> impl IntoElement {
    let Settings {
        density_scale,
        shape,
    } = settings;

    section(
        "Button",
        div()
            .flex()
            .flex_row()
            .items_center()
            .gap_4()
            .child(
                Button::unelevated("button-unelevated", "Button")
                    .leading_icon(IconName::Add)
                    .density(density_scale)
                    .shape(shape),
            )
            .child(
                Button::raised("button-raised", "Button")
                    .leading_icon(IconName::Add)
                    .density(density_scale)
                    .shape(shape),
            )
            .child(
                Button::outlined("button-outlined", "Button")
                    .leading_icon(IconName::Add)
                    .density(density_scale)
                    .shape(shape),
            ),
    )
}

fn chip_section(settings: Settings) -> impl IntoElement {
    let density_scale = settings.density_scale;

    section(
        "Chips",
        div()
            .flex()
            .flex_row()
            .items_center()
            .gap_2()
            .child(
                Chip::new("chip-lights", "Turn on lights")
                    .leading_icon(IconName::WbSunny)
                    .density(density_scale),
            )
            .child(
                Chip::new("chip-alarm", "Set alarm")
                    .leading_icon(IconName::Alarm)
                    .density(density_scale),
            )
            .child(
                Chip::new("chip-music", "Play music")
                    .leading_icon(IconName::MusicNote)
                    .density(density_scale),
            ),
    )
}

fn icon_button_section(settings: Settings) -> impl IntoElement {
    let density_scale = settings.density_scale;

    section(
        "Icon Button",
        div()
            .flex()
            .flex_row()
            .items_center()
            .gap_2()
            .child(
                IconButton::new("icon-button-underline", IconName::FormatUnderline)
                    .density(density_scale),
            )
            .child(IconButton::new("icon-button-attach", IconName::AttachFile).density(density_scale))
            .child(IconButton::new("icon-button-link", IconName::Link).density(density_scale))
            .child(IconButton::new("icon-button-faces", IconName::TagFaces).density(density_scale)),
    )
}

fn checkbox_section(settings: Settings) -> impl IntoElement {
    let density_scale = settings.density_scale;

    section(
        "Checkbox",
        div()
            .flex()
            .flex_row()
            .items_center()
            .gap_4()
            .child(
                Checkbox::new("checkbox-pickles")
                    .label("Pickles")
                    .density(density_scale),
            )
            .child(
                Checkbox::new("checkbox-tomato")
                    .label("Tomato")
                    .checked(true)
                    .density(density_scale),
            )
            .child(
                Checkbox::new("checkbox-lettuce")
                    .label("Lettuce")
                    .checked(true)
                    .density(density_scale),
            ),
    )
}

fn text_field_section(settings: Settings) -> impl IntoElement {
    let Settings {
        density_scale,
        shape,
    } = settings;

    section(
        "Text Field",
        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                TextField::new("text-field-outlined", "Label")
                    .outlined(true)
                    .value("Pre-filled")
                    .helper_text("Assistive text")
                    .leading_icon(IconName::Search)
                    .density(density_scale)
                    .shape(shape),
            )
            .child(
                TextField::new("text-field-outlined-counter", "Label")
                    .outlined(true)
                    .value("Pre-filled")
                    .helper_text("Assistive text")
                    .character_limit(18)
                    .leading_icon(IconName::Search)
                    .trailing_icon(IconName::Visibility)
                    .density(density_scale)
                    .shape(shape),
            )
            .child(
                TextField::new("text-field-outlined-empty", "Label")
                    .outlined(true)
                    .helper_text("Assistive text")
                    .leading_icon(IconName::Search)
                    .density(density_scale)
                    .shape(shape),
            )
            .child(
                TextField::new("text-field-filled", "Label")
                    .value("Pre-filled")
                    .helper_text("Assistive text")
                    .character_limit(18)
                    .leading_icon(IconName::Favorite)
                    .density(density_scale)
                    .shape(shape),
            )
            .child(
                TextField::new("text-field-filled-empty", "Label")
                    .helper_text("Assistive text")
                    .character_limit(18)
                    .leading_icon(IconName::Search)
                    .density(density_scale)
                    .shape(shape),
            ),
    )
}
