//! Gallery Feature
//!
//! The component showcase page and its change handlers.

pub mod controller;
pub mod page;
