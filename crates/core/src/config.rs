//! Game configuration
//!
//! Every knob has a default from [`crate::types`]. A JSON file may override any
//! subset of them; missing keys keep their defaults.
//!
//! ```
//! use tui_blockfall_core::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "width": 12, "seed": 7 }"#).unwrap();
//! assert_eq!(config.width, 12);
//! assert_eq!(config.height, 20);
//! assert_eq!(config.seed, Some(7));
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    Size, DEFAULT_DISPLAYED_FIGURES, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DEFAULT_MAX_SPEED,
    DEFAULT_SCORE_MULTIPLIER, DEFAULT_START_SPEED,
};

/// Narrowest field that still fits the widest bitmap (the 4x4 I)
pub const MIN_FIELD_WIDTH: u16 = 4;

/// Largest accepted width or height. Grid coordinates are `i16`.
pub const MAX_FIELD_SIDE: u16 = 1024;

/// Largest accepted `max_speed`; the descent interval is `max_speed * 2`.
pub const MAX_SPEED_LIMIT: u32 = 1_000_000;

/// Seed used when none is configured
pub const DEFAULT_SEED: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    /// Length of the lookahead window
    pub displayed_figures: usize,
    pub start_speed: u32,
    pub max_speed: u32,
    pub score_multiplier: u32,
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            displayed_figures: DEFAULT_DISPLAYED_FIGURES,
            start_speed: DEFAULT_START_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            score_multiplier: DEFAULT_SCORE_MULTIPLIER,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn seed_or_default(&self) -> u32 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_FIELD_WIDTH {
            return Err(ConfigError::Invalid {
                field: "width",
                reason: format!("must be at least {MIN_FIELD_WIDTH}, got {}", self.width),
            });
        }
        if self.width > MAX_FIELD_SIDE {
            return Err(ConfigError::Invalid {
                field: "width",
                reason: format!("must be at most {MAX_FIELD_SIDE}, got {}", self.width),
            });
        }
        if self.height == 0 {
            return Err(ConfigError::Invalid {
                field: "height",
                reason: "must be positive".to_string(),
            });
        }
        if self.height > MAX_FIELD_SIDE {
            return Err(ConfigError::Invalid {
                field: "height",
                reason: format!("must be at most {MAX_FIELD_SIDE}, got {}", self.height),
            });
        }
        if self.displayed_figures == 0 {
            return Err(ConfigError::Invalid {
                field: "displayed_figures",
                reason: "must be positive".to_string(),
            });
        }
        if self.max_speed > MAX_SPEED_LIMIT {
            return Err(ConfigError::Invalid {
                field: "max_speed",
                reason: format!("must be at most {MAX_SPEED_LIMIT}, got {}", self.max_speed),
            });
        }
        if self.start_speed >= self.max_speed {
            return Err(ConfigError::Invalid {
                field: "start_speed",
                reason: format!(
                    "must be below max_speed ({}), got {}",
                    self.max_speed, self.start_speed
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.size(), Size::new(10, 20));
        assert_eq!(config.seed_or_default(), DEFAULT_SEED);
    }

    #[test]
    fn rejects_narrow_field() {
        let config = GameConfig {
            width: 3,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "width", .. })
        ));
    }

    #[test]
    fn rejects_non_positive_interval() {
        let config = GameConfig {
            start_speed: 400,
            max_speed: 400,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "start_speed", .. })
        ));
    }

    #[test]
    fn rejects_fields_too_large_for_grid_coordinates() {
        let tall = GameConfig {
            height: 40_000,
            ..GameConfig::default()
        };
        assert!(matches!(
            tall.validate(),
            Err(ConfigError::Invalid { field: "height", .. })
        ));

        let wide = GameConfig {
            width: MAX_FIELD_SIDE + 1,
            ..GameConfig::default()
        };
        assert!(matches!(
            wide.validate(),
            Err(ConfigError::Invalid { field: "width", .. })
        ));

        let largest = GameConfig {
            width: MAX_FIELD_SIDE,
            height: MAX_FIELD_SIDE,
            ..GameConfig::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn rejects_max_speed_that_would_overflow_the_interval() {
        let config = GameConfig {
            start_speed: 1,
            max_speed: 3_000_000_000,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "max_speed", .. })
        ));
    }

    #[test]
    fn rejects_empty_lookahead() {
        let config = GameConfig {
            displayed_figures: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_errors_are_reported() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
