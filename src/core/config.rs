// Game tuning and startup configuration

use serde::Deserialize;
use std::path::Path;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "MAGLAB_CONFIG";

/// Window title
pub const TITLE: &str = "MagLab - Ebitengine Game Jam 22";

/// Logical screen size, scaled from a 108x234 portrait layout
pub const SCREEN_FACTOR: f32 = 3.0;
pub const SCREEN_WIDTH: f32 = 108.0 * SCREEN_FACTOR;
pub const SCREEN_HEIGHT: f32 = 234.0 * SCREEN_FACTOR;

/// Sizes in logical pixels
pub const BALL_SIZE: f32 = 5.0;
pub const MAGNET_SIZE: f32 = 5.0;
pub const BELL_SIZE: f32 = 20.0;
pub const SCORE_MARGIN: f32 = 5.0;

/// Font sizes (cell width equals the font size)
pub const FONT_SIZE: f32 = 24.0;
pub const TITLE_FONT_SIZE: f32 = FONT_SIZE * 1.5;
pub const SMALL_FONT_SIZE: f32 = FONT_SIZE / 2.0;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Time to live of a magnet in seconds
    pub magnet_ttl: f64,
    /// Distance max between ball and magnet to have effect
    pub max_length: f32,
    /// Max force applied to the ball
    pub max_force: f32,
    /// Countdown before the magnets start pulling
    pub preparation_duration: f64,
    /// Max score for 1 minute
    pub score_starting_points: i64,
    /// Malus points for each magnet placed
    pub score_malus_magnet: i64,
    /// Ball velocity multiplier applied after every step
    pub friction: f32,
    /// Name of the level to play
    pub level: String,
    /// Draw the ball velocity vector
    pub draw_velocity: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            magnet_ttl: 10.0,
            max_length: 300.0,
            max_force: 3000.0,
            preparation_duration: 5.0,
            score_starting_points: 6128,
            score_malus_magnet: 42,
            friction: 0.98,
            level: "Snake".to_string(),
            draw_velocity: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from the file named by `MAGLAB_CONFIG`, or fall back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::from_file(path)
            }
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                })
            }
        }

        positive("magnet_ttl", self.magnet_ttl)?;
        positive("max_length", self.max_length as f64)?;
        positive("max_force", self.max_force as f64)?;
        positive("preparation_duration", self.preparation_duration)?;

        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "friction",
                reason: format!("must be in (0, 1], got {}", self.friction),
            });
        }

        if crate::game::level::find(&self.level).is_none() {
            return Err(ConfigError::Invalid {
                field: "level",
                reason: format!("unknown level '{}'", self.level),
            });
        }

        Ok(())
    }
}
