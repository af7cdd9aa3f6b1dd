//! Game state module - the session and its lifecycle
//!
//! This module ties together all core components: lanes, player, traffic,
//! progression and RNG. It owns the per-frame update order and the
//! Running/GameOver state machine.

use log::info;

use crate::adapter::RenderSink;
use crate::collision;
use crate::lanes::{compute_lanes, LaneSet};
use crate::obstacle::{Obstacle, SpawnRules, Spawner};
use crate::player::Player;
use crate::progression::{Progression, ProgressionRules};
use crate::rng::SimpleRng;
use crate::snapshot::FrameSnapshot;
use crate::sprite::Sprite;
use crate::types::*;

/// What the loop should do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    lanes: LaneSet,
    player: Player,
    spawner: Spawner,
    progression: Progression,
    rng: SimpleRng,
    phase: GamePhase,
    /// Distance the road has scrolled; drives the center-line animation.
    road_offset: f32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Simulated frames in the current episode.
    frames: u32,
}

impl GameState {
    /// Create a running session.
    ///
    /// `config` is expected to have passed [`GameConfig::validate`].
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let lanes = compute_lanes(config.width, config.lane_padding, config.lane_count as usize);
        let spawner = Spawner::new(
            lanes.clone(),
            SpawnRules {
                delay_ms: config.spawn_delay_ms,
                spawn_y: SPAWN_Y,
                speed_jitter: config.speed_jitter,
                car_width: config.car_width,
                car_height: config.car_height,
                visible_bottom: config.height,
            },
        );
        let progression = Progression::new(ProgressionRules {
            base_speed: config.base_speed,
            max_speed: config.max_speed,
            increment: config.difficulty_increment,
            threshold: config.score_threshold,
            score_divisor_ms: config.score_divisor_ms,
        });
        let player = Self::fresh_player(&config, &lanes);

        Self {
            config,
            lanes,
            player,
            spawner,
            progression,
            rng: SimpleRng::new(seed),
            phase: GamePhase::Running,
            road_offset: 0.0,
            episode_id: 0,
            frames: 0,
        }
    }

    /// Validate `config` and create a running session.
    pub fn try_new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    fn fresh_player(config: &GameConfig, lanes: &LaneSet) -> Player {
        Player::new(
            lanes.clone(),
            config.start_lane(),
            config.height - PLAYER_BOTTOM_MARGIN,
            config.car_width,
            config.car_height,
            config.player_speed,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    /// Current difficulty speed.
    pub fn speed(&self) -> f32 {
        self.progression.speed()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.spawner.obstacles()
    }

    pub fn lanes(&self) -> &LaneSet {
        &self.lanes
    }

    pub fn road_offset(&self) -> f32 {
        self.road_offset
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn spawn_timer_ms(&self) -> u32 {
        self.spawner.timer_ms()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Place an obstacle directly, bypassing the spawn timer (scripted
    /// scenarios).
    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        self.spawner.push(obstacle);
    }

    /// Start a fresh episode: zero score, baseline speed, empty road, player
    /// back in the start lane.
    ///
    /// The RNG keeps running so consecutive episodes see different traffic.
    pub fn reset(&mut self) {
        self.progression.reset();
        self.spawner.clear();
        self.player = Self::fresh_player(&self.config, &self.lanes);
        self.phase = GamePhase::Running;
        self.road_offset = 0.0;
        self.frames = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("reset: episode {}", self.episode_id);
    }

    /// Apply one input command.
    pub fn handle_action(&mut self, action: GameAction) -> Flow {
        match (self.phase, action) {
            (_, GameAction::Quit) => return Flow::Quit,
            (GamePhase::Running, GameAction::MoveLeft) => {
                self.player.move_left();
            }
            (GamePhase::Running, GameAction::MoveRight) => {
                self.player.move_right();
            }
            (GamePhase::GameOver, GameAction::Restart) => self.reset(),
            // Steering a wreck, or restarting mid-run, does nothing.
            (GamePhase::GameOver, GameAction::MoveLeft | GameAction::MoveRight)
            | (GamePhase::Running, GameAction::Restart) => {}
        }
        Flow::Continue
    }

    /// Advance the simulation by one frame. No-op once the game is over.
    ///
    /// Returns true if this frame ended the run.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        self.frames = self.frames.wrapping_add(1);
        self.road_offset += self.progression.speed();

        self.spawner
            .update(elapsed_ms, self.progression.speed(), &mut self.rng);
        self.spawner.advance_all();
        self.player.update();
        self.progression.advance(elapsed_ms);

        if self.check_collision() {
            self.phase = GamePhase::GameOver;
            info!(
                "game over: episode {} score {} after {} frames",
                self.episode_id,
                self.score(),
                self.frames
            );
            return true;
        }
        false
    }

    /// Apply this frame's commands in arrival order, then step the simulation.
    pub fn step(&mut self, actions: &[GameAction], elapsed_ms: u32) -> Flow {
        for &action in actions {
            if self.handle_action(action) == Flow::Quit {
                return Flow::Quit;
            }
        }
        self.update(elapsed_ms);
        Flow::Continue
    }

    pub fn check_collision(&self) -> bool {
        collision::check(&self.player, self.spawner.obstacles())
    }

    pub fn snapshot_into(&self, out: &mut FrameSnapshot) {
        out.phase = self.phase;
        out.world_width = self.config.width;
        out.world_height = self.config.height;
        if out.lanes != self.lanes {
            out.lanes = self.lanes.clone();
        }
        out.road_offset = self.road_offset;
        out.player = Some(self.player.view());
        out.player_lane = self.player.lane_index();
        out.obstacles.clear();
        out.obstacles
            .extend(self.spawner.obstacles().iter().map(Sprite::view));
        out.score = self.score();
        out.speed = self.speed();
        out.episode_id = self.episode_id;
        out.frames = self.frames;
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let mut s = FrameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Refresh `scratch` and hand it to the sink's method for the current
    /// phase.
    pub fn present<R: RenderSink + ?Sized>(
        &self,
        scratch: &mut FrameSnapshot,
        sink: &mut R,
    ) -> anyhow::Result<()> {
        self.snapshot_into(scratch);
        match self.phase {
            GamePhase::Running => sink.draw_frame(scratch),
            GamePhase::GameOver => sink.draw_game_over(scratch),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
