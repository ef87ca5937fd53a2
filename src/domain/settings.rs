//! Settings - Density and Shape Configuration
//!
//! The two settings driving the gallery. Each is a closed enum; the stored
//! value is an `Option` so a control event that carries no value leaves the
//! setting absent, and rendering falls through to the baseline styling.

use serde::{Deserialize, Serialize};

/// Visual density level affecting component sizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityScale {
    /// Low-density spacing with large tap targets (Material default)
    #[default]
    Default,
    /// One density step down
    Comfortable,
    /// Two density steps down
    Compact,
}

impl DensityScale {
    /// All scales, in control order
    pub const ALL: [DensityScale; 3] = [
        DensityScale::Default,
        DensityScale::Comfortable,
        DensityScale::Compact,
    ];

    /// Parse a raw control value; unknown strings yield `None`
    pub fn from_value(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(DensityScale::Default),
            "comfortable" => Some(DensityScale::Comfortable),
            "compact" => Some(DensityScale::Compact),
            _ => None,
        }
    }

    /// The raw value carried by the toggle control
    pub fn value(self) -> &'static str {
        match self {
            DensityScale::Default => "default",
            DensityScale::Comfortable => "comfortable",
            DensityScale::Compact => "compact",
        }
    }

    /// Human-readable control label
    pub fn label(self) -> &'static str {
        match self {
            DensityScale::Default => "Default",
            DensityScale::Comfortable => "Comfortable",
            DensityScale::Compact => "Compact",
        }
    }

    /// Density steps below the default scale (0, -1, -2)
    pub fn step(self) -> i32 {
        match self {
            DensityScale::Default => 0,
            DensityScale::Comfortable => -1,
            DensityScale::Compact => -2,
        }
    }
}

/// Corner shape of components that support it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Baseline corners
    #[default]
    Default,
    /// Fully rounded corners
    Rounded,
}

impl Shape {
    /// Both shapes, in control order
    pub const ALL: [Shape; 2] = [Shape::Default, Shape::Rounded];

    /// Parse a raw control value; unknown strings yield `None`
    pub fn from_value(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(Shape::Default),
            "rounded" => Some(Shape::Rounded),
            _ => None,
        }
    }

    /// The raw value carried by the toggle control
    pub fn value(self) -> &'static str {
        match self {
            Shape::Default => "default",
            Shape::Rounded => "rounded",
        }
    }

    /// Human-readable control label
    pub fn label(self) -> &'static str {
        match self {
            Shape::Default => "Default",
            Shape::Rounded => "Rounded",
        }
    }
}

/// Current UI settings of the gallery
///
/// Both keys are present (`Some` of the enum default) after construction via
/// `Default`. `None` marks a value that went absent through a control event
/// carrying no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub density_scale: Option<DensityScale>,
    pub shape: Option<Shape>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            density_scale: Some(DensityScale::Default),
            shape: Some(Shape::Default),
        }
    }
}

impl Settings {
    /// Merge a partial update: keys mentioned in the patch take the patch
    /// value, unmentioned keys keep their prior value.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(density_scale) = patch.density_scale {
            self.density_scale = density_scale;
        }
        if let Some(shape) = patch.shape {
            self.shape = shape;
        }
    }
}

/// Partial settings update
///
/// Each field distinguishes "not mentioned" (retain prior value) from "set
/// to this value", where the value itself may be the absent marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    density_scale: Option<Option<DensityScale>>,
    shape: Option<Option<Shape>>,
}

impl SettingsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the density scale in this patch
    pub fn density_scale(mut self, value: Option<DensityScale>) -> Self {
        self.density_scale = Some(value);
        self
    }

    /// Include the shape in this patch
    pub fn shape(mut self, value: Option<Shape>) -> Self {
        self.shape = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_have_both_keys() {
        let settings = Settings::default();
        assert_eq!(settings.density_scale, Some(DensityScale::Default));
        assert_eq!(settings.shape, Some(Shape::Default));
    }

    #[test]
    fn merge_overwrites_only_mentioned_keys() {
        let mut settings = Settings::default();
        settings.merge(SettingsPatch::new().density_scale(Some(DensityScale::Compact)));

        assert_eq!(settings.density_scale, Some(DensityScale::Compact));
        assert_eq!(settings.shape, Some(Shape::Default));
    }

    #[test]
    fn merge_empty_patch_is_noop() {
        let mut settings = Settings::default();
        settings.merge(SettingsPatch::new());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn merge_can_clear_a_key() {
        let mut settings = Settings::default();
        settings.merge(SettingsPatch::new().shape(None));

        assert_eq!(settings.shape, None);
        assert_eq!(settings.density_scale, Some(DensityScale::Default));
    }

    #[test]
    fn density_values_round_trip() {
        for scale in DensityScale::ALL {
            assert_eq!(DensityScale::from_value(scale.value()), Some(scale));
        }
    }

    #[test]
    fn shape_values_round_trip() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_value(shape.value()), Some(shape));
        }
    }

    #[test]
    fn unknown_values_parse_to_none() {
        assert_eq!(DensityScale::from_value("cozy"), None);
        assert_eq!(DensityScale::from_value(""), None);
        assert_eq!(Shape::from_value("square"), None);
    }
}
