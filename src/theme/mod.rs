//! Theme - Colors, Typography and Density Metrics

pub mod colors;
pub mod density;
pub mod typography;
