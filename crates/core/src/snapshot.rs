//! Render-facing copy of the session, refilled every frame.

use crate::lanes::{compute_lanes, LaneSet};
use crate::sprite::SpriteView;
use crate::types::{GameConfig, GamePhase};

/// Everything a renderer needs for one frame.
///
/// Callers keep one snapshot around and refill it with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into); the obstacle
/// list reuses its allocation across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub world_width: f32,
    pub world_height: f32,
    pub lanes: LaneSet,
    pub road_offset: f32,
    pub player: Option<SpriteView>,
    pub player_lane: usize,
    pub obstacles: Vec<SpriteView>,
    pub score: u32,
    pub speed: f32,
    pub episode_id: u32,
    pub frames: u32,
}

impl FrameSnapshot {
    pub fn clear(&mut self) {
        self.phase = GamePhase::Running;
        self.road_offset = 0.0;
        self.player = None;
        self.player_lane = 0;
        self.obstacles.clear();
        self.score = 0;
        self.speed = 0.0;
        self.episode_id = 0;
        self.frames = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase.is_running()
    }

    /// Cheap identity of what a static (game-over) frame shows.
    pub fn fingerprint(&self) -> u64 {
        let phase_bit = match self.phase {
            GamePhase::Running => 0u64,
            GamePhase::GameOver => 1u64,
        };
        ((self.episode_id as u64) << 33) | ((self.score as u64) << 1) | phase_bit
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            phase: GamePhase::Running,
            world_width: config.width,
            world_height: config.height,
            lanes: compute_lanes(config.width, config.lane_padding, config.lane_count as usize),
            road_offset: 0.0,
            player: None,
            player_lane: 0,
            obstacles: Vec::new(),
            score: 0,
            speed: 0.0,
            episode_id: 0,
            frames: 0,
        }
    }
}
