//! UI Constants
//!
//! Centralized UI constants for consistent layout across the gallery.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 780.0;

/// Horizontal padding of the page content
pub const PAGE_PADDING_X: f32 = 32.0;

/// Width of a showcased text field
pub const TEXT_FIELD_WIDTH: f32 = 240.0;

/// Startup configuration file name (looked up in the platform data dir)
pub const CONFIG_FILE: &str = "gallery.json";
