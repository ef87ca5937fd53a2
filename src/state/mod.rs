//! State - GPUI Entity State Modules
//!
//! The settings entity is the single source of truth for the gallery's UI
//! settings; views observe it and re-render on change.

pub mod settings_state;
