use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::snake::{GrowthModel, IndexPolicy};
use super::state::SpeedPolicy;
use crate::error::ConfigError;

/// Smallest board edge accepted, border included.
pub const MIN_BOARD_EDGE: u16 = 10;

/// Configuration for the game
///
/// Read from JSON using the upper-case key names, e.g.
///
/// ```json
/// { "WINDOW_HEIGHT": 20, "WINDOW_WIDTH": 40, "INITIAL_SPEED": 2.0, "SPEED_INCREMENT": 0.5 }
/// ```
///
/// The four keys above are required; the rest fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GameConfig {
    /// Board height in rows, border included
    pub window_height: u16,
    /// Board width in columns, border included
    pub window_width: u16,
    /// Ticks per second at the start of a session
    pub initial_speed: f64,
    /// Speed gained per food item
    pub speed_increment: f64,

    #[serde(default = "default_initial_size")]
    pub initial_size: usize,
    #[serde(default)]
    pub speed_policy: SpeedPolicy,
    #[serde(default)]
    pub growth_model: GrowthModel,
    #[serde(default)]
    pub index_policy: IndexPolicy,
    /// Random draws tried before scanning for a free cell
    #[serde(default = "default_food_attempts")]
    pub food_attempts: usize,
}

fn default_initial_size() -> usize {
    3
}

fn default_food_attempts() -> usize {
    64
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_height: 20,
            window_width: 40,
            initial_speed: 2.0,
            speed_increment: 0.5,
            initial_size: default_initial_size(),
            speed_policy: SpeedPolicy::default(),
            growth_model: GrowthModel::default(),
            index_policy: IndexPolicy::default(),
            food_attempts: default_food_attempts(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(height: u16, width: u16) -> Self {
        Self {
            window_height: height,
            window_width: width,
            ..Default::default()
        }
    }

    /// Load and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check every value is usable before a board is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("WINDOW_HEIGHT", self.window_height),
            ("WINDOW_WIDTH", self.window_width),
        ] {
            if value < MIN_BOARD_EDGE {
                return Err(ConfigError::TooSmall {
                    key,
                    min: MIN_BOARD_EDGE.into(),
                    value: value.into(),
                });
            }
        }

        if !self.initial_speed.is_finite() || self.initial_speed <= 0.0 {
            return Err(ConfigError::OutOfRange {
                key: "INITIAL_SPEED",
                expected: "a finite number above 0",
                value: self.initial_speed,
            });
        }

        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            return Err(ConfigError::OutOfRange {
                key: "SPEED_INCREMENT",
                expected: "a finite number of at least 0",
                value: self.speed_increment,
            });
        }

        if self.initial_size < 2 {
            return Err(ConfigError::TooSmall {
                key: "INITIAL_SIZE",
                min: 2,
                value: self.initial_size as u32,
            });
        }

        // the tail must land in column 1 or further right
        if self.initial_size > usize::from(self.window_width / 2) {
            return Err(ConfigError::SnakeDoesNotFit {
                size: self.initial_size,
                width: self.window_width,
            });
        }

        if self.food_attempts == 0 {
            return Err(ConfigError::TooSmall {
                key: "FOOD_ATTEMPTS",
                min: 1,
                value: 0,
            });
        }

        Ok(())
    }

    pub fn board_height(&self) -> i32 {
        i32::from(self.window_height)
    }

    pub fn board_width(&self) -> i32 {
        i32::from(self.window_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.window_height, 20);
        assert_eq!(config.window_width, 40);
        assert_eq!(config.initial_size, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 25);
        assert_eq!(config.window_height, 15);
        assert_eq!(config.window_width, 25);
    }

    #[test]
    fn test_load_required_keys() {
        let file = write_config(
            r#"{"WINDOW_HEIGHT": 24, "WINDOW_WIDTH": 30, "INITIAL_SPEED": 4, "SPEED_INCREMENT": 0.25}"#,
        );
        let config = GameConfig::from_file(file.path()).unwrap();

        assert_eq!(config.window_height, 24);
        assert_eq!(config.window_width, 30);
        assert_eq!(config.initial_speed, 4.0);
        assert_eq!(config.speed_increment, 0.25);
        assert_eq!(config.speed_policy, SpeedPolicy::Additive);
        assert_eq!(config.growth_model, GrowthModel::Extrapolate);
        assert_eq!(config.index_policy, IndexPolicy::Clamp);
    }

    #[test]
    fn test_load_optional_keys() {
        let file = write_config(
            r#"{
                "WINDOW_HEIGHT": 20, "WINDOW_WIDTH": 20, "INITIAL_SPEED": 10, "SPEED_INCREMENT": 0.05,
                "INITIAL_SIZE": 5, "SPEED_POLICY": "multiplicative",
                "GROWTH_MODEL": "turning_points", "INDEX_POLICY": "strict", "FOOD_ATTEMPTS": 8
            }"#,
        );
        let config = GameConfig::from_file(file.path()).unwrap();

        assert_eq!(config.initial_size, 5);
        assert_eq!(config.speed_policy, SpeedPolicy::Multiplicative);
        assert_eq!(config.growth_model, GrowthModel::TurningPoints);
        assert_eq!(config.index_policy, IndexPolicy::Strict);
        assert_eq!(config.food_attempts, 8);
    }

    #[test]
    fn test_missing_key_fails() {
        let file = write_config(r#"{"WINDOW_HEIGHT": 20, "WINDOW_WIDTH": 20, "INITIAL_SPEED": 2}"#);
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_validation() {
        let small = GameConfig::new(9, 20);
        assert!(matches!(
            small.validate(),
            Err(ConfigError::TooSmall { key: "WINDOW_HEIGHT", .. })
        ));

        let narrow = GameConfig::new(20, 9);
        assert!(matches!(
            narrow.validate(),
            Err(ConfigError::TooSmall { key: "WINDOW_WIDTH", .. })
        ));

        let stalled = GameConfig {
            initial_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            stalled.validate(),
            Err(ConfigError::OutOfRange { key: "INITIAL_SPEED", .. })
        ));

        let slowing = GameConfig {
            speed_increment: -1.0,
            ..Default::default()
        };
        assert!(slowing.validate().is_err());

        let stub = GameConfig {
            initial_size: 1,
            ..Default::default()
        };
        assert!(stub.validate().is_err());

        let long = GameConfig {
            initial_size: 6,
            ..GameConfig::new(10, 10)
        };
        assert!(matches!(
            long.validate(),
            Err(ConfigError::SnakeDoesNotFit { size: 6, width: 10 })
        ));
        assert!(GameConfig {
            initial_size: 5,
            ..GameConfig::new(10, 10)
        }
        .validate()
        .is_ok());
    }
}
