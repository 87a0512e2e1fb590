use serde::{Deserialize, Serialize};

use crate::core::Vec2;

use super::error::ConfigError;

/// Character hitbox and gravity
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub half_width: f32,
    pub half_height: f32,
    pub gravity_acceleration: f32,
}

impl BodyConfig {
    pub fn new(half_width: f32, half_height: f32, gravity_acceleration: f32) -> Self {
        Self { half_width, half_height, gravity_acceleration }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }
}

/// Elevator-style platform: box plus a vertical stop schedule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub half_width: f32,
    pub half_height: f32,
    /// Heights the platform travels between, in order (wraps around)
    #[serde(default)]
    pub stops: Vec<f32>,
    /// Distance per tick
    #[serde(default)]
    pub speed: f32,
    /// Ticks to dwell at each stop
    #[serde(default)]
    pub wait_ticks: u32,
}

impl PlatformConfig {
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }
}

/// Reject non-positive or non-finite half extents.
pub fn check_half_extents(half_width: f32, half_height: f32) -> Result<(), ConfigError> {
    let ok = |v: f32| v.is_finite() && v > 0.0;
    if ok(half_width) && ok(half_height) {
        Ok(())
    } else {
        Err(ConfigError::InvalidHalfExtent { half_width, half_height })
    }
}
