//! Features - Vertical Feature Slices

pub mod gallery;
