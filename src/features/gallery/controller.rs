//! Gallery Controller
//!
//! Change handlers for the toggle controls: read the raw value carried by
//! the clicked option, merge it into the settings store, and let the
//! observe/notify cycle rebuild the views. Update-then-render is synchronous
//! within the event's call stack.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::settings::{DensityScale, SettingsPatch, Shape};

/// Gallery change handlers
#[derive(Clone)]
pub struct GalleryController {
    entities: AppEntities,
}

impl GalleryController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Handle a density scale control change. An absent or unknown raw
    /// value clears the setting; rendering then falls through to the
    /// baseline styling.
    pub fn set_density_scale(&self, raw: Option<&str>, cx: &mut App) {
        let density_scale = raw.and_then(DensityScale::from_value);
        tracing::debug!("Density scale changed to {:?}", density_scale);

        self.entities.settings.update(cx, |settings, cx| {
            settings.set(SettingsPatch::new().density_scale(density_scale), cx);
        });
    }

    /// Handle a shape control change
    pub fn set_shape(&self, raw: Option<&str>, cx: &mut App) {
        let shape = raw.and_then(Shape::from_value);
        tracing::debug!("Shape changed to {:?}", shape);

        self.entities.settings.update(cx, |settings, cx| {
            settings.set(SettingsPatch::new().shape(shape), cx);
        });
    }
}
