//! Startup configuration.
//!
//! Values come from three layers, later ones winning:
//!
//! 1. Built-in defaults (the constants in the crate root)
//! 2. A JSON file named by `RACER_CONFIG`
//! 3. Individual environment overrides (`RACER_LANES`, `RACER_SEED`, ...)
//!
//! The merged result is validated once; the simulation never re-checks it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    BASE_SPEED, CAR_HEIGHT, CAR_WIDTH, DEFAULT_LANE_COUNT, DIFFICULTY_INCREMENT, LANE_PADDING,
    MAX_LANES, MAX_SPEED, MAX_SPEED_JITTER, PLAYER_MOVE_SPEED, SCORE_DIVISOR_MS, SCORE_THRESHOLD, SPAWN_DELAY_MS,
    SPEED_JITTER, WORLD_HEIGHT, WORLD_WIDTH,
};

/// Game tuning knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub lane_count: u8,
    pub lane_padding: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    pub speed_jitter: u32,
    pub spawn_delay_ms: u32,
    pub score_threshold: u32,
    pub difficulty_increment: f32,
    pub score_divisor_ms: u32,
    pub player_speed: f32,
    pub car_width: f32,
    pub car_height: f32,
    /// RNG seed; `None` lets the binary pick one from the clock.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            lane_count: DEFAULT_LANE_COUNT,
            lane_padding: LANE_PADDING,
            base_speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            speed_jitter: SPEED_JITTER,
            spawn_delay_ms: SPAWN_DELAY_MS,
            score_threshold: SCORE_THRESHOLD,
            difficulty_increment: DIFFICULTY_INCREMENT,
            score_divisor_ms: SCORE_DIVISOR_MS,
            player_speed: PLAYER_MOVE_SPEED,
            car_width: CAR_WIDTH,
            car_height: CAR_HEIGHT,
            seed: None,
        }
    }
}

/// Configuration failure. Raised at startup only.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidEnv {
        key: &'static str,
        value: String,
    },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config file {}: {}", path, source)
            }
            ConfigError::Parse(e) => write!(f, "malformed config file: {}", e),
            ConfigError::InvalidEnv { key, value } => {
                write!(f, "invalid value for {}: {:?}", key, value)
            }
            ConfigError::Invalid(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match non_empty(lookup("RACER_CONFIG")) {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Io { path, source })?;
                Self::from_json_str(&text)?
            }
            None => Self::default(),
        };

        if let Some(v) = parse_var::<u8>(&lookup, "RACER_LANES")? {
            config.lane_count = v;
        }
        if let Some(v) = parse_var::<u32>(&lookup, "RACER_SEED")? {
            config.seed = Some(v);
        }
        if let Some(v) = parse_var::<f32>(&lookup, "RACER_BASE_SPEED")? {
            config.base_speed = v;
        }
        if let Some(v) = parse_var::<f32>(&lookup, "RACER_MAX_SPEED")? {
            config.max_speed = v;
        }
        if let Some(v) = parse_var::<u32>(&lookup, "RACER_SPAWN_DELAY_MS")? {
            config.spawn_delay_ms = v;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a (possibly partial) JSON document over the defaults.
    ///
    /// Does not validate; callers go through [`GameConfig::validate`].
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Width of a single lane once padding is removed.
    pub fn lane_width(&self) -> f32 {
        (self.width - 2.0 * self.lane_padding) / self.lane_count.max(1) as f32
    }

    /// Lane the player starts in.
    pub fn start_lane(&self) -> usize {
        self.lane_count as usize / 2
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn finite_positive(v: f32) -> bool {
            v.is_finite() && v > 0.0
        }

        if !finite_positive(self.width) || !finite_positive(self.height) {
            return Err(invalid(format!(
                "world size must be positive (got {}x{})",
                self.width, self.height
            )));
        }
        if self.lane_count < 1 || self.lane_count as usize > MAX_LANES {
            return Err(invalid(format!(
                "lane_count must be in 1..={} (got {})",
                MAX_LANES, self.lane_count
            )));
        }
        if !self.lane_padding.is_finite()
            || self.lane_padding < 0.0
            || 2.0 * self.lane_padding >= self.width
        {
            return Err(invalid(format!(
                "lane_padding must leave room for a road (got {} on width {})",
                self.lane_padding, self.width
            )));
        }
        if !finite_positive(self.car_width) || !finite_positive(self.car_height) {
            return Err(invalid("car size must be positive".to_string()));
        }
        if self.lane_width() < self.car_width {
            return Err(invalid(format!(
                "lanes are {:.1} px wide, narrower than a {} px car",
                self.lane_width(),
                self.car_width
            )));
        }
        if !finite_positive(self.base_speed) {
            return Err(invalid(format!(
                "base_speed must be positive (got {})",
                self.base_speed
            )));
        }
        if !self.max_speed.is_finite() || self.max_speed < self.base_speed {
            return Err(invalid(format!(
                "max_speed {} is below base_speed {}",
                self.max_speed, self.base_speed
            )));
        }
        if self.speed_jitter > MAX_SPEED_JITTER {
            return Err(invalid(format!(
                "speed_jitter must be at most {} (got {})",
                MAX_SPEED_JITTER, self.speed_jitter
            )));
        }
        if !self.difficulty_increment.is_finite() || self.difficulty_increment < 0.0 {
            return Err(invalid(format!(
                "difficulty_increment must not be negative (got {})",
                self.difficulty_increment
            )));
        }
        if !finite_positive(self.player_speed) {
            return Err(invalid(format!(
                "player_speed must be positive (got {})",
                self.player_speed
            )));
        }
        if self.spawn_delay_ms == 0 {
            return Err(invalid("spawn_delay_ms must be non-zero".to_string()));
        }
        if self.score_threshold == 0 {
            return Err(invalid("score_threshold must be non-zero".to_string()));
        }
        if self.score_divisor_ms == 0 {
            return Err(invalid("score_divisor_ms must be non-zero".to_string()));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> ConfigError {
    ConfigError::Invalid(reason)
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match non_empty(lookup(key)) {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { key, value }),
    }
}
