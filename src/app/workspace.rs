//! Workspace - Main Shell
//!
//! The workspace holds the header and the gallery page, separated by a
//! divider. Each child observes the settings entity and rebuilds itself
//! when it notifies.

use gpui::{div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::features::gallery::page::GalleryPage;
use crate::theme::colors::GalleryColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    gallery: Entity<GalleryPage>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let gallery = cx.new(|cx| GalleryPage::new(entities.clone(), cx));

        Self { header, gallery }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(GalleryColors::background())
            .child(self.header.clone())
            .child(div().h(px(1.0)).w_full().bg(GalleryColors::divider()))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.gallery.clone()),
            )
    }
}
