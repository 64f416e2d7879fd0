//! Game configuration
//!
//! Defaults match the classic 12x24 board. [`GameConfig::from_env`] reads
//! `FALLING_BLOCKS_*` overrides; the binary layers CLI flags on top.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_SHAPE_SIZE, SOLO_FALL_MS};

/// How the session treats a rotation that would collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPolicy {
    /// Rotate only when the rotated shape fits at the current origin
    #[default]
    Checked,
    /// Always rotate. Parts of the piece may end up off the board; those
    /// cells are dropped when the piece locks.
    Unchecked,
}

impl RotationPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "checked" => Some(RotationPolicy::Checked),
            "unchecked" => Some(RotationPolicy::Unchecked),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var}: unknown value {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("board must be at least {min}x{min} cells, got {width}x{height}")]
    BoardTooSmall { width: u8, height: u8, min: u8 },
    #[error("fall interval must be greater than zero")]
    ZeroFallInterval,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: u8,
    pub board_height: u8,
    pub fall_interval: Duration,
    /// Fixed seed for reproducible games; `None` seeds from the clock
    pub seed: Option<u32>,
    pub rotation: RotationPolicy,
    /// Where to write the tracing log; logging is off without it
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            fall_interval: Duration::from_millis(SOLO_FALL_MS as u64),
            seed: None,
            rotation: RotationPolicy::Checked,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = non_empty(lookup("FALLING_BLOCKS_WIDTH")) {
            config.board_width = parse_number("FALLING_BLOCKS_WIDTH", &v)?;
        }
        if let Some(v) = non_empty(lookup("FALLING_BLOCKS_HEIGHT")) {
            config.board_height = parse_number("FALLING_BLOCKS_HEIGHT", &v)?;
        }
        if let Some(v) = non_empty(lookup("FALLING_BLOCKS_FALL_MS")) {
            let ms: u64 = parse_number("FALLING_BLOCKS_FALL_MS", &v)?;
            config.fall_interval = Duration::from_millis(ms);
        }
        if let Some(v) = non_empty(lookup("FALLING_BLOCKS_SEED")) {
            config.seed = Some(parse_number("FALLING_BLOCKS_SEED", &v)?);
        }
        if let Some(v) = non_empty(lookup("FALLING_BLOCKS_ROTATION")) {
            config.rotation =
                RotationPolicy::from_str(&v).ok_or(ConfigError::InvalidValue {
                    var: "FALLING_BLOCKS_ROTATION",
                    value: v,
                })?;
        }
        config.log_path = non_empty(lookup("FALLING_BLOCKS_LOG")).map(PathBuf::from);

        config.validate()?;
        Ok(config)
    }

    /// Check that every catalog piece fits and gravity can fire.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width < MAX_SHAPE_SIZE || self.board_height < MAX_SHAPE_SIZE {
            return Err(ConfigError::BoardTooSmall {
                width: self.board_width,
                height: self.board_height,
                min: MAX_SHAPE_SIZE,
            });
        }
        if self.fall_interval.is_zero() {
            return Err(ConfigError::ZeroFallInterval);
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}
