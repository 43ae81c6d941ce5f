//! Scene files: curve objects plus export settings
//!
//! A scene file is TOML. The `[settings]` table mirrors the exporter's
//! user settings and each `[[objects]]` entry is one host object:
//!
//! ```toml
//! [settings]
//! precision = 2
//!
//! [[objects]]
//! name = "Square"
//! location = [1.0, 2.0]
//! materials = [{ name = "Red", diffuse_color = [1.0, 0.0, 0.0] }]
//!
//! [[objects.splines]]
//! cyclic = true
//! points = [
//!     { co = [0.0, 0.0], handle_left = [0.0, 0.0], handle_right = [0.0, 0.0] },
//!     { co = [4.0, 0.0], handle_left = [4.0, 0.0], handle_right = [4.0, 0.0] },
//! ]
//! ```

pub mod selection;
pub mod types;

use std::path::Path;

use serde::Deserialize;

use crate::error::SceneError;
use crate::renderer::ExportSettings;

pub use selection::{eligible_objects, is_eligible, SelectionSummary};
pub use types::{
    BezierPoint, Dimensions, HandleType, Material, ObjectKind, SceneObject, Spline,
};

/// Objects to export together with the settings to export them with
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub settings: ExportSettings,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(content)?;
        log::debug!("loaded scene with {} objects", scene.objects.len());
        Ok(scene)
    }
}
