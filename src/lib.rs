//! Density Gallery Library
//!
//! This crate provides the application logic for the density gallery, a
//! native showcase of Material-style components (buttons, chips, checkboxes,
//! text fields) rendered at varying density scales and corner shapes.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod state;
pub mod theme;
pub mod utils;
