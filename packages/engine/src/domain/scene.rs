//! Scene description loaded from JSON
//!
//! ```json
//! {
//!   "settings": { "tick_duration": 0.02 },
//!   "obstacles": [{ "position": { "x": 0, "y": 0 }, "half_extents": { "x": 8, "y": 0.5 } }],
//!   "characters": [{ "position": { "x": 0, "y": 2 },
//!                    "body": { "half_width": 0.4, "half_height": 0.5, "gravity_acceleration": -2 } }],
//!   "platforms": [{ "position": { "x": 4, "y": 0 },
//!                   "platform": { "half_width": 1, "half_height": 0.25, "stops": [0, 3], "speed": 0.05 } }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Vec2;

use super::config::{BodyConfig, PlatformConfig};
use super::settings::PhysicsSettings;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDesc {
    pub settings: PhysicsSettings,
    pub obstacles: Vec<ObstacleDesc>,
    pub characters: Vec<CharacterDesc>,
    pub platforms: Vec<PlatformDesc>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ObstacleDesc {
    pub position: Vec2,
    pub half_extents: Vec2,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CharacterDesc {
    pub position: Vec2,
    pub body: BodyConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlatformDesc {
    pub position: Vec2,
    pub platform: PlatformConfig,
}

impl SceneDesc {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let scene: SceneDesc = serde_json::from_str(json).map_err(|e| e.to_string())?;
        scene.settings.validate()?;
        Ok(scene)
    }
}
