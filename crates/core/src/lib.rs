//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the road, session state and the
//! per-frame simulation. It has **no dependency** on terminals or input
//! devices, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical runs
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Runs headless, in a terminal, or behind any other renderer
//!
//! # Module Structure
//!
//! - [`lanes`]: lane centers derived from road width, padding and lane count
//! - [`player`]: lane index plus smooth constant-speed lane changes
//! - [`obstacle`]: oncoming traffic and its spawn timer
//! - [`collision`]: axis-aligned boxes and the crash test
//! - [`progression`]: survival score and stepped difficulty
//! - [`game_state`]: the session, its update order and Running/GameOver lifecycle
//! - [`adapter`]: input source and render sink traits
//! - [`clock`]: frame pacing arithmetic
//! - [`rng`]: deterministic LCG used for lanes and speed bonuses
//!
//! # Example
//!
//! ```
//! use tui_racer_core::{Flow, GameState};
//! use tui_racer_types::{GameAction, GameConfig};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//!
//! // One frame: steer left, then simulate 16ms.
//! assert_eq!(game.step(&[GameAction::MoveLeft], 16), Flow::Continue);
//! assert_eq!(game.player().lane_index(), 0);
//! assert_eq!(game.score(), 1);
//! ```
//!
//! # Frame Order
//!
//! Each running frame: commands (arrival order) → spawn timer → traffic moves
//! and leaves → player steps toward its lane → score and difficulty →
//! collision check. A crash freezes the session until a restart.

pub mod adapter;
pub mod clock;
pub mod collision;
pub mod game_state;
pub mod lanes;
pub mod obstacle;
pub mod player;
pub mod progression;
pub mod rng;
pub mod snapshot;
pub mod sprite;

pub use tui_racer_types as types;

// Re-export commonly used types for convenience
pub use adapter::{ActionBuffer, InputSource, RenderSink, ScriptedInput, ACTION_BUFFER_CAP};
pub use clock::FrameClock;
pub use collision::Rect;
pub use game_state::{Flow, GameState};
pub use lanes::{compute_lanes, LaneSet};
pub use obstacle::{Obstacle, SpawnRules, Spawner};
pub use player::Player;
pub use progression::{Progression, ProgressionRules};
pub use rng::SimpleRng;
pub use snapshot::FrameSnapshot;
pub use sprite::{Sprite, SpriteKind, SpriteView};
