//! Game configuration
//!
//! Values are layered: built-in defaults, then `config/default.toml` (optional),
//! then environment variables prefixed with `SLINGSHOT__`.

use config::{Config, Environment, File};
use macroquad::math::{Vec2, vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lower bound for `world.fixed_step_s`.
pub const MIN_FIXED_STEP_S: f32 = 1e-4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// World extents and the static ground.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub gravity_y: f32,
    /// Height of the ground line; blocks rest on `ground_y + ground_half_thickness`.
    pub ground_y: f32,
    pub ground_half_thickness: f32,
    pub ground_friction: f32,
    pub fixed_step_s: f32,
    /// Upper bound on simulated time per rendered frame.
    pub max_frame_s: f32,
    /// Projectile is recycled once it drops below this height.
    pub recycle_min_y: f32,
    /// Projectile is recycled once it passes `width * recycle_max_x_factor`.
    pub recycle_max_x_factor: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            gravity_y: -900.0,
            ground_y: 60.0,
            ground_half_thickness: 4.0,
            ground_friction: 1.0,
            fixed_step_s: 1.0 / 60.0,
            max_frame_s: 0.10,
            recycle_min_y: -200.0,
            recycle_max_x_factor: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlingshotConfig {
    pub origin_x: f32,
    pub origin_y: f32,
    pub max_drag_distance: f32,
    pub launch_gain: f32,
    /// Pointer must be within `projectile radius * grab_radius_factor` to grab.
    pub grab_radius_factor: f32,
}

impl Default for SlingshotConfig {
    fn default() -> Self {
        Self {
            origin_x: 150.0,
            origin_y: 180.0,
            max_drag_distance: 140.0,
            launch_gain: 7.0,
            grab_radius_factor: 1.4,
        }
    }
}

impl SlingshotConfig {
    pub fn origin(&self) -> Vec2 {
        vec2(self.origin_x, self.origin_y)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub radius: f32,
    pub mass: f32,
    pub elasticity: f32,
    pub friction: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            radius: 16.0,
            mass: 4.0,
            elasticity: 0.6,
            friction: 0.9,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    pub rows: usize,
    pub cols: usize,
    pub width: f32,
    pub height: f32,
    pub mass: f32,
    pub start_x: f32,
    pub gap_x: f32,
    pub gap_y: f32,
    pub elasticity: f32,
    pub friction: f32,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 4,
            width: 60.0,
            height: 30.0,
            mass: 5.0,
            start_x: 600.0,
            gap_x: 5.0,
            gap_y: 2.0,
            elasticity: 0.2,
            friction: 0.8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub dir: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: "plots".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub slingshot: SlingshotConfig,
    pub projectile: ProjectileConfig,
    pub blocks: BlockConfig,
    pub export: ExportConfig,
}

impl GameConfig {
    /// Loads `config/default.toml` (if present) and `SLINGSHOT__*` overrides
    /// on top of the built-in defaults, then validates the result.
    ///
    /// Nested keys use `__`, e.g. `SLINGSHOT__PROJECTILE__MASS=6`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config/default")
    }

    pub fn load_from(base: &str) -> Result<Self, ConfigError> {
        let loaded: Self = Config::builder()
            .add_source(File::with_name(base).required(false))
            .add_source(
                Environment::with_prefix("SLINGSHOT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(bool, &str); 9] = [
            (self.world.width > 0.0, "world.width must be positive"),
            (self.world.height > 0.0, "world.height must be positive"),
            (
                self.world.fixed_step_s >= MIN_FIXED_STEP_S,
                "world.fixed_step_s must be at least 0.0001",
            ),
            (
                self.world.max_frame_s >= self.world.fixed_step_s,
                "world.max_frame_s must cover one fixed step",
            ),
            (self.projectile.radius > 0.0, "projectile.radius must be positive"),
            (self.projectile.mass > 0.0, "projectile.mass must be positive"),
            (self.blocks.mass > 0.0, "blocks.mass must be positive"),
            (
                self.blocks.width > 0.0 && self.blocks.height > 0.0,
                "blocks need a positive size",
            ),
            (
                self.slingshot.max_drag_distance >= 0.0,
                "slingshot.max_drag_distance cannot be negative",
            ),
        ];

        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, reason)) => Err(ConfigError::Invalid((*reason).to_string())),
            None => Ok(()),
        }
    }
}
