//! AppEntities - Shared Entity Handles
//!
//! The settings entity is constructed once at application start and handed
//! to each view by clone. Views never reach it through a global; ownership
//! flows through constructors.

use gpui::{App, AppContext, Entity};

use crate::domain::settings::Settings;
use crate::state::settings_state::SettingsState;

/// Collection of shared Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Current UI settings of the gallery
    pub settings: Entity<SettingsState>,
}

impl AppEntities {
    /// Initialize all entities from the initial settings
    pub fn init(initial: Settings, cx: &mut App) -> Self {
        Self {
            settings: cx.new(|_| SettingsState::new(initial)),
        }
    }
}
