//! Simulation Configuration
//!
//! Every tuning constant of the sandbox in one serializable struct. All
//! speeds and accelerations are **per tick** at the configured tick rate.
//! `Default` reproduces the stock feel; a JSON file may override any subset
//! of fields (missing fields fall back to the defaults).

use std::fmt;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tunables for the whole simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Build cell edge length (world units)
    pub grid_size: f32,
    /// Camera boom length behind the actor
    pub camera_distance: f32,
    /// Camera boom height above the actor
    pub camera_height: f32,
    /// Height of the actor's reference point above the ground when standing
    pub eye_height: f32,
    /// Planar distance covered per tick at full input
    pub move_speed: f32,
    /// Vertical velocity set by a jump
    pub jump_impulse: f32,
    /// Vertical velocity change per tick (negative pulls down)
    pub gravity: f32,
    /// Projectile distance per tick
    pub projectile_speed: f32,
    /// Full edge length of a projectile's hit cube
    pub projectile_extent: f32,
    /// Projectiles farther than this from the world origin are removed
    pub max_projectile_range: f32,
    /// Actor collision box half width/depth
    pub actor_half_width: f32,
    /// Actor collision box full height
    pub actor_height: f32,
    /// Look sensitivity in radians per pixel
    pub look_sensitivity: f32,
    /// Symmetric pitch clamp in radians
    pub pitch_limit: f32,
    /// Ghost distance along the aim ray when the ray misses the ground
    pub ghost_fallback_distance: f32,
    /// Half extent of the ground patch; `None` for an unbounded plane
    pub ground_half_extent: Option<f32>,
    /// Actor spawn position
    pub spawn_position: Vec3,
    /// Fixed simulation rate
    pub tick_rate_hz: f32,
    /// Cap on catch-up ticks per rendered frame
    pub max_steps_per_frame: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: 3.0,
            camera_distance: 6.0,
            camera_height: 2.0,
            eye_height: 1.6,
            move_speed: 0.12,
            jump_impulse: 0.28,
            gravity: -0.015,
            projectile_speed: 1.2,
            projectile_extent: 0.25,
            max_projectile_range: 250.0,
            actor_half_width: 0.6,
            actor_height: 1.6,
            look_sensitivity: 0.0025,
            pitch_limit: 0.9,
            ghost_fallback_distance: 6.0,
            ground_half_extent: None,
            spawn_position: Vec3::new(0.0, 1.6, 5.0),
            tick_rate_hz: 60.0,
            max_steps_per_frame: 8,
        }
    }
}

/// Errors raised while loading or validating a [`SimConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON deserialization error.
    Json(serde_json::Error),
    /// A field holds a value the simulation cannot run with.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl SimConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Seconds per tick.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    /// Reject values that would break snapping, collision or the fixed step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("grid_size", self.grid_size),
            ("move_speed", self.move_speed),
            ("projectile_speed", self.projectile_speed),
            ("projectile_extent", self.projectile_extent),
            ("max_projectile_range", self.max_projectile_range),
            ("actor_half_width", self.actor_half_width),
            ("actor_height", self.actor_height),
            ("tick_rate_hz", self.tick_rate_hz),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if !(self.gravity.is_finite() && self.gravity <= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "gravity must be zero or negative, got {}",
                self.gravity
            )));
        }
        if !(self.pitch_limit > 0.0 && self.pitch_limit < std::f32::consts::FRAC_PI_2) {
            return Err(ConfigError::Invalid(format!(
                "pitch_limit must be in (0, pi/2), got {}",
                self.pitch_limit
            )));
        }
        if let Some(extent) = self.ground_half_extent
            && !(extent.is_finite() && extent > 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "ground_half_extent must be positive, got {extent}"
            )));
        }
        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::Invalid(
                "max_steps_per_frame must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimConfig::from_json_str(r#"{ "grid_size": 2.0, "gravity": -0.02 }"#)
            .expect("partial config should parse");
        assert_eq!(config.grid_size, 2.0);
        assert_eq!(config.gravity, -0.02);
        assert_eq!(config.move_speed, 0.12);
        assert_eq!(config.max_projectile_range, 250.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SimConfig {
            ground_half_extent: Some(100.0),
            ..SimConfig::default()
        };
        let json = config.to_json_pretty().expect("serialize");
        let back = SimConfig::from_json_str(&json).expect("parse");
        assert_eq!(back, config);
    }

    #[test]
    fn test_rejects_bad_grid() {
        let err = SimConfig::from_json_str(r#"{ "grid_size": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("grid_size"));
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let config = SimConfig {
            gravity: 0.5,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_nan_ground_extent() {
        for extent in [f32::NAN, f32::INFINITY, -4.0] {
            let config = SimConfig {
                ground_half_extent: Some(extent),
                ..SimConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = SimConfig::from_json_str("{ grid_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimConfig::load("/definitely/not/here/sim.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
