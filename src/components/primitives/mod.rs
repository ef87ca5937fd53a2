//! Primitive Components
//!
//! The showcased Material-style building blocks.

pub mod button;
pub mod checkbox;
pub mod chip;
pub mod icon;
pub mod icon_button;
pub mod text_field;
pub mod toggle_button;
