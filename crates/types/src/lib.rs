//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data, usable from the simulation core, the
//! terminal renderer and the input layer alike.
//!
//! # World Dimensions
//!
//! The simulation runs in "world pixels", independent of the terminal size:
//!
//! - **Width**: 480 px, of which 40 px on each side is shoulder (lane padding)
//! - **Height**: 700 px, y grows downward
//! - **Lanes**: 3 by default, centered inside the padded road
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame budget (~60 FPS) |
//! | `SPAWN_DELAY_MS` | 1000 | Time between obstacle spawns |
//! | `SCORE_DIVISOR_MS` | 10 | Elapsed ms per score point |
//!
//! # Speeds
//!
//! Speeds are expressed in world pixels per frame:
//!
//! - `BASE_SPEED`: 6.0 - obstacle speed at the start of a run
//! - `MAX_SPEED`: 18.0 - difficulty cap
//! - `DIFFICULTY_INCREMENT`: 0.5 - added every `SCORE_THRESHOLD` points
//! - `SPEED_JITTER`: 3 - max extra speed rolled per obstacle
//! - `PLAYER_MOVE_SPEED`: 12.0 - horizontal lane-change step
//!
//! # Examples
//!
//! ```
//! use tui_racer_types::{GameAction, GamePhase, DEFAULT_LANE_COUNT};
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(GamePhase::GameOver.as_str(), "game_over");
//! assert_eq!(DEFAULT_LANE_COUNT, 3);
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig};

/// World width in pixels
pub const WORLD_WIDTH: f32 = 480.0;

/// World height in pixels
pub const WORLD_HEIGHT: f32 = 700.0;

/// Fixed frame budget in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default number of lanes
pub const DEFAULT_LANE_COUNT: u8 = 3;

/// Upper bound for `lane_count`; lane sets are stored inline.
pub const MAX_LANES: usize = 8;

/// Shoulder width on each side of the road
pub const LANE_PADDING: f32 = 40.0;

/// Car footprint (player and obstacles share it)
pub const CAR_WIDTH: f32 = 40.0;
pub const CAR_HEIGHT: f32 = 80.0;

/// Horizontal distance the player covers per frame while changing lanes
pub const PLAYER_MOVE_SPEED: f32 = 12.0;

/// Gap between the player's bottom edge and the bottom of the world
pub const PLAYER_BOTTOM_MARGIN: f32 = 40.0;

/// Obstacles enter with their top edge here, above the visible area
pub const SPAWN_Y: f32 = -100.0;

/// Obstacle speed at the start of a run
pub const BASE_SPEED: f32 = 6.0;

/// Difficulty cap
pub const MAX_SPEED: f32 = 18.0;

/// Per-obstacle random speed bonus is drawn from `0..=SPEED_JITTER`
pub const SPEED_JITTER: u32 = 3;

/// Upper bound for `speed_jitter`.
pub const MAX_SPEED_JITTER: u32 = 1000;

/// Time between obstacle spawns
pub const SPAWN_DELAY_MS: u32 = 1000;

/// Difficulty rises each time the score passes a multiple of this
pub const SCORE_THRESHOLD: u32 = 1000;

/// Speed added per threshold
pub const DIFFICULTY_INCREMENT: f32 = 0.5;

/// One score point per this many elapsed milliseconds
pub const SCORE_DIVISOR_MS: u32 = 10;


/// Discrete commands delivered by an input source
///
/// The core consumes these once per frame, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Steer one lane to the left
    MoveLeft,
    /// Steer one lane to the right
    MoveRight,
    /// Start a new run (only honored on the game-over screen)
    Restart,
    /// Leave the game, in any phase
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_racer_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "restart" => Some(GameAction::Restart),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// Session lifecycle
///
/// - **Running**: the road scrolls, obstacles spawn, score accrues
/// - **GameOver**: frozen after a crash until a restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Running,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Running => "running",
            GamePhase::GameOver => "game_over",
        }
    }

    pub fn is_running(&self) -> bool {
        *self == GamePhase::Running
    }
}
