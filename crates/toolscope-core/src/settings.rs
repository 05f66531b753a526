use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_CAMERA_URL;

/// Persisted endpoint settings.
///
/// Unknown keys are ignored and missing keys fall back to defaults, so
/// older settings files keep loading as the struct grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Snapshot URL of the inspection camera.
    pub camera: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camera: DEFAULT_CAMERA_URL.to_string(),
        }
    }
}
