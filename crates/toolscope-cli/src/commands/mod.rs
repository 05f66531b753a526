pub mod config;
pub mod focus;
pub mod snapshot;

use std::path::PathBuf;

use anyhow::{Context, Result};
use toolscope_core::camera::{FileCamera, HttpCamera, SnapshotSource};
use toolscope_core::settings::Settings;

/// Load settings from a TOML file, or defaults when none is given.
pub fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings {}", path.display()))?;
            toml::from_str(&contents).context("Invalid settings file")
        }
        None => Ok(Settings::default()),
    }
}

/// Pick the snapshot source: an input file wins over an explicit
/// camera URL, which wins over the settings file.
pub fn resolve_source(
    input: Option<&PathBuf>,
    camera: Option<&str>,
    settings: &Settings,
) -> Box<dyn SnapshotSource> {
    if let Some(path) = input {
        Box::new(FileCamera::new(path))
    } else if let Some(url) = camera {
        Box::new(HttpCamera::new(url))
    } else {
        Box::new(HttpCamera::new(settings.camera.clone()))
    }
}
