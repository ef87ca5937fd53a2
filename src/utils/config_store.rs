//! ConfigStore - Local Configuration Lookup
//!
//! Read-only: the gallery loads its startup configuration from the platform
//! data directory and never writes settings back.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| Error::Invalid {
            message: "Could not find local data directory".to_string(),
        })?
        .join("density-gallery");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a JSON config file, falling back to the default when absent
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = app_data_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}
