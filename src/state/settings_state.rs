//! Settings State
//!
//! Owns the gallery's `Settings` value exclusively. Consumers read snapshot
//! copies via `get`; all mutation goes through `set`, which notifies
//! observers so dependent views rebuild from the new snapshot.

use gpui::Context;

use crate::domain::settings::{Settings, SettingsPatch};

/// Store for the current UI settings
pub struct SettingsState {
    settings: Settings,
}

impl SettingsState {
    /// Create the store from an initial settings value. All keys must be
    /// present in `initial`; the store itself applies no defaults.
    pub fn new(initial: Settings) -> Self {
        Self { settings: initial }
    }

    /// Snapshot of the current settings, decoupled from the stored value
    pub fn get(&self) -> Settings {
        self.settings
    }

    /// Merge a partial update without notifying observers
    fn apply(&mut self, patch: SettingsPatch) {
        self.settings.merge(patch);
    }

    /// Merge a partial update and notify observers
    pub fn set(&mut self, patch: SettingsPatch, cx: &mut Context<Self>) {
        self.apply(patch);
        cx.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::{DensityScale, Shape};

    #[test]
    fn patched_keys_take_patch_value_others_unchanged() {
        let mut state = SettingsState::new(Settings::default());

        state.apply(SettingsPatch::new().density_scale(Some(DensityScale::Compact)));

        let settings = state.get();
        assert_eq!(settings.density_scale, Some(DensityScale::Compact));
        assert_eq!(settings.shape, Some(Shape::Default));
    }

    #[test]
    fn snapshot_is_isolated_from_store() {
        let state = SettingsState::new(Settings::default());

        let mut snapshot = state.get();
        snapshot.density_scale = Some(DensityScale::Compact);
        snapshot.shape = None;

        assert_eq!(state.get(), Settings::default());
    }

    #[test]
    fn sequential_patches_do_not_clobber_unrelated_keys() {
        let mut state = SettingsState::new(Settings::default());

        state.apply(SettingsPatch::new().shape(Some(Shape::Rounded)));
        state.apply(SettingsPatch::new().density_scale(Some(DensityScale::Comfortable)));

        let settings = state.get();
        assert_eq!(settings.density_scale, Some(DensityScale::Comfortable));
        assert_eq!(settings.shape, Some(Shape::Rounded));
    }

    #[test]
    fn absent_control_value_clears_the_key() {
        let mut state = SettingsState::new(Settings::default());

        state.apply(SettingsPatch::new().density_scale(None));

        assert_eq!(state.get().density_scale, None);
        assert_eq!(state.get().shape, Some(Shape::Default));
    }

    #[test]
    fn construction_keeps_given_values() {
        let initial = Settings {
            density_scale: Some(DensityScale::Comfortable),
            shape: Some(Shape::Rounded),
        };

        let state = SettingsState::new(initial);
        assert_eq!(state.get(), initial);
    }
}
