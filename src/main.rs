//! Density Gallery - Main Entry Point
//!
//! Native showcase of Material-style components at varying density scales
//! and corner shapes.

use density_gallery::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Density Gallery...");

    // Run the GPUI application
    run_app();
}
