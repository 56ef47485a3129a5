//! Scene configuration and loading.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use greybox_controller::ControllerConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading a scene config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config file {path}: tick_rate must be at least 1")]
    InvalidTickRate { path: PathBuf },
}

/// Scene configuration.
///
/// Everything needed to rebuild the demo deterministically: frame timing,
/// the obstacle scatter seed, entity placement, and the controller
/// tuning. Any subset can be overridden from a TOML file; omitted fields
/// keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Frames per second the demo steps at. [`SceneConfig::load`] rejects
    /// zero, which would make the time step infinite.
    pub tick_rate: u32,

    /// Seed for the obstacle scatter.
    pub seed: u32,

    /// Number of obstacle cubes.
    pub obstacle_count: u32,

    /// Player spawn position.
    pub player_spawn: Vec3,

    /// Door center position.
    pub door_position: Vec3,

    /// Controller tuning.
    pub controller: ControllerConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            seed: 7,
            obstacle_count: 10,
            player_spawn: Vec3::ZERO,
            door_position: Vec3::new(3.0, 1.5, 3.0),
            controller: ControllerConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Time step per frame in seconds.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.tick_rate == 0 {
            return Err(ConfigError::InvalidTickRate {
                path: path.to_path_buf(),
            });
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SceneConfig::default();
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.obstacle_count, 10);
        assert_eq!(config.door_position, Vec3::new(3.0, 1.5, 3.0));
        assert!((config.delta_time() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SceneConfig = toml::from_str(
            r#"
            tick_rate = 30
            seed = 99

            [controller]
            walk_speed = 6.0
            "#,
        )
        .unwrap();

        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.seed, 99);
        // Untouched fields keep their defaults
        assert_eq!(config.obstacle_count, 10);
        assert_eq!(config.controller.walk_speed, 6.0);
        assert_eq!(config.controller.run_speed, 12.0);
    }

    #[test]
    fn test_vectors_parse_as_arrays() {
        let config: SceneConfig = toml::from_str(
            r#"
            player_spawn = [1.0, 0.0, -2.0]
            door_position = [5.0, 1.5, 5.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.player_spawn, Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(config.door_position, Vec3::new(5.0, 1.5, 5.0));
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let err = SceneConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_zero_tick_rate_is_rejected() {
        let path = std::env::temp_dir().join("greybox-zero-tick-rate.toml");
        fs::write(&path, "tick_rate = 0").unwrap();

        let err = SceneConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTickRate { .. }));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = SceneConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: SceneConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.tick_rate, config.tick_rate);
        assert_eq!(parsed.door_position, config.door_position);
        assert_eq!(parsed.controller.dash_speed, config.controller.dash_speed);
    }
}
