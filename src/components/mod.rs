//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on application state or do I/O.

pub mod layout;
pub mod primitives;
