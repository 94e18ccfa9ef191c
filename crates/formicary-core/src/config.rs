use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Playing field dimensions. Random placement draws integer coordinates from
/// `0..=width` and `0..=height`; ants are not clamped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: u32,
    pub height: u32,
}

impl WorldBounds {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    pub world: WorldBounds,
    /// Nest position; the world centre when unset.
    pub nest_pos: Option<Vec2>,
    pub ant_count: u32,
    pub snack_target: u32,
    /// Snacks spawn with a value drawn from `1..=snack_max_value`.
    pub snack_max_value: u32,
    pub ant_speed: f32,
    pub sensor_range: f32,
    /// Searching ants beyond this distance from the nest head for a random point.
    pub far_from_home: f32,
    pub trail_lifetime: f32,
    pub nest_size: f32,
    /// Also the reach within which an ant counts as touching a snack, trail or the nest.
    pub ant_size: f32,
    pub snack_size: f32,
    pub trail_size: f32,
    pub seed: Option<u64>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            world: WorldBounds::default(),
            nest_pos: None,
            ant_count: 50,
            snack_target: 25,
            snack_max_value: 25,
            ant_speed: 25.0,
            sensor_range: 20.0,
            far_from_home: 333.0,
            trail_lifetime: 10.0,
            nest_size: 10.0,
            ant_size: 3.0,
            snack_size: 6.0,
            trail_size: 1.0,
            seed: None,
        }
    }
}

impl ColonyConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn nest_position(&self) -> Vec2 {
        self.nest_pos.unwrap_or_else(|| self.world.center())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("ant_speed", self.ant_speed),
            ("sensor_range", self.sensor_range),
            ("far_from_home", self.far_from_home),
            ("trail_lifetime", self.trail_lifetime),
            ("nest_size", self.nest_size),
            ("ant_size", self.ant_size),
            ("snack_size", self.snack_size),
            ("trail_size", self.trail_size),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.world.width == 0 {
            return Err(ConfigError::NotPositive {
                field: "world.width",
                value: 0.0,
            });
        }
        if self.world.height == 0 {
            return Err(ConfigError::NotPositive {
                field: "world.height",
                value: 0.0,
            });
        }
        if let Some(nest) = self.nest_pos {
            if !nest.is_finite() {
                return Err(ConfigError::NonFinite { field: "nest_pos" });
            }
        }
        if self.snack_max_value == 0 {
            return Err(ConfigError::EmptySnacks);
        }
        Ok(())
    }
}
