use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Global physics tuning shared by every body and platform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Seconds per fixed tick
    pub tick_duration: f32,
    /// Inset applied to hitboxes before casting
    pub skin_width: f32,
    /// Velocity divisor applied on ground / walls (1 = no friction)
    pub friction_denominator: f32,
    /// Default gravity (velocity delta per tick) for new characters
    pub gravity: f32,
    /// Rays cast along a platform's top edge
    pub platform_ray_count: usize,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            tick_duration: 0.02,
            skin_width: 0.015,
            friction_denominator: 1.0,
            gravity: -2.0,
            platform_ray_count: 4,
        }
    }
}

impl PhysicsSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: PhysicsSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_duration.is_finite() && self.tick_duration > 0.0) {
            return Err(ConfigError::InvalidTickDuration(self.tick_duration));
        }
        if !(self.skin_width.is_finite() && self.skin_width >= 0.0) {
            return Err(ConfigError::InvalidSkinWidth(self.skin_width));
        }
        if !(self.friction_denominator.is_finite() && self.friction_denominator >= 1.0) {
            return Err(ConfigError::InvalidFriction(self.friction_denominator));
        }
        if self.platform_ray_count < 2 {
            return Err(ConfigError::TooFewRays(self.platform_ray_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let s = PhysicsSettings::from_json(r#"{ "friction_denominator": 1.25 }"#).unwrap();
        assert_eq!(s.friction_denominator, 1.25);
        assert_eq!(s.tick_duration, 0.02);
        assert_eq!(s.platform_ray_count, 4);
    }

    #[test]
    fn rejects_accelerating_friction() {
        let err = PhysicsSettings::from_json(r#"{ "friction_denominator": 0.5 }"#).unwrap_err();
        assert!(err.contains("Friction"));
    }

    #[test]
    fn rejects_single_ray() {
        let s = PhysicsSettings { platform_ray_count: 1, ..Default::default() };
        assert_eq!(s.validate(), Err(ConfigError::TooFewRays(1)));
    }

    #[test]
    fn rejects_bad_json() {
        assert!(PhysicsSettings::from_json("{ tick").is_err());
    }
}
