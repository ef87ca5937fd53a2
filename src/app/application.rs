//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{CONFIG_FILE, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::GalleryConfig;
use crate::domain::settings::Settings;
use crate::utils::config_store;

actions!(gallery, [Quit]);

/// Run the gallery application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("secondary-q", Quit, None)]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initial settings: explicit defaults, optionally overridden by the
        // local startup config
        let initial = load_initial_settings();
        let entities = AppEntities::init(initial, cx);

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Material Density")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        });
        if let Err(error) = opened {
            tracing::error!("Failed to open main window: {}", error);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

/// Load the initial settings, degrading to defaults when the startup config
/// is missing or unreadable
fn load_initial_settings() -> Settings {
    match config_store::load_config::<GalleryConfig>(CONFIG_FILE) {
        Ok(config) => config.initial_settings(),
        Err(error) => {
            tracing::warn!("Failed to load gallery config: {}", error);
            Settings::default()
        }
    }
}
