//! Config - Startup Configuration

use serde::{Deserialize, Serialize};

use crate::domain::settings::{DensityScale, Settings, Shape};

/// Startup configuration for the gallery
///
/// Loaded from `gallery.json` in the platform data directory when present.
/// Only the initial settings are configurable; settings changed through the
/// UI are never written back.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryConfig {
    /// Initial density scale, overriding the built-in default
    pub density_scale: Option<DensityScale>,
    /// Initial corner shape, overriding the built-in default
    pub shape: Option<Shape>,
}

impl GalleryConfig {
    /// Resolve the initial settings: configured values where present,
    /// built-in defaults elsewhere.
    pub fn initial_settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            density_scale: self.density_scale.or(defaults.density_scale),
            shape: self.shape.or(defaults.shape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.initial_settings(), Settings::default());
    }

    #[test]
    fn configured_values_override_defaults() {
        let config = GalleryConfig {
            density_scale: Some(DensityScale::Compact),
            shape: None,
        };

        let settings = config.initial_settings();
        assert_eq!(settings.density_scale, Some(DensityScale::Compact));
        assert_eq!(settings.shape, Some(Shape::Default));
    }

    #[test]
    fn config_parses_from_json() {
        let config: GalleryConfig =
            serde_json::from_str(r#"{"densityScale": "comfortable", "shape": "rounded"}"#)
                .expect("valid config");

        assert_eq!(config.density_scale, Some(DensityScale::Comfortable));
        assert_eq!(config.shape, Some(Shape::Rounded));
    }
}
