use serde::{Deserialize, Serialize};

use crate::domain::errors::RenderResult;
use crate::domain::logging::LogLevel;

pub const DEFAULT_CANVAS_ID: &str = "main-canvas";
pub const DEFAULT_CUBE_CENTER: [f32; 3] = [1.0, 1.0, 1.0];
pub const DEFAULT_CUBE_SIZE: f32 = 2.0;

/// Startup parameters of the scene.
///
/// Missing JSON fields fall back to the defaults, so `{}` describes the
/// stock scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub canvas_id: String,
    pub cube_center: [f32; 3],
    pub cube_size: f32,
    pub verbose_logging: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            cube_center: DEFAULT_CUBE_CENTER,
            cube_size: DEFAULT_CUBE_SIZE,
            verbose_logging: cfg!(debug_assertions),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Lowest level the console logger should emit
    pub fn min_log_level(&self) -> LogLevel {
        if self.verbose_logging { LogLevel::Debug } else { LogLevel::Info }
    }
}
