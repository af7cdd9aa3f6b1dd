//! Oncoming traffic: obstacle cars and the timer that spawns them.

use log::debug;

use crate::collision::Rect;
use crate::lanes::LaneSet;
use crate::rng::SimpleRng;
use crate::sprite::{Sprite, SpriteKind, SpriteView};

/// A car driving down a lane at a fixed speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Center x; always one of the lane centers.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Pixels per frame.
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

impl Sprite for Obstacle {
    fn update(&mut self) {
        self.y += self.speed;
    }

    fn bounds(&self) -> Rect {
        Rect::centered_x(self.x, self.y, self.width, self.height)
    }

    fn view(&self) -> SpriteView {
        SpriteView {
            kind: SpriteKind::Obstacle,
            rect: self.bounds(),
        }
    }
}

/// Spawn parameters that stay fixed for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRules {
    pub delay_ms: u32,
    /// Top edge of a freshly spawned obstacle.
    pub spawn_y: f32,
    /// Extra speed is drawn uniformly from `0..=speed_jitter`.
    pub speed_jitter: u32,
    pub car_width: f32,
    pub car_height: f32,
    /// Obstacles whose top edge passes this are removed.
    pub visible_bottom: f32,
}

/// Owns the live obstacle set.
///
/// At most one obstacle spawns per [`Spawner::update`], however much time the
/// call covers; the timer then restarts from zero.
#[derive(Debug, Clone)]
pub struct Spawner {
    lanes: LaneSet,
    rules: SpawnRules,
    timer_ms: u32,
    obstacles: Vec<Obstacle>,
}

impl Spawner {
    pub fn new(lanes: LaneSet, rules: SpawnRules) -> Self {
        Self {
            lanes,
            rules,
            timer_ms: 0,
            obstacles: Vec::with_capacity(16),
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn timer_ms(&self) -> u32 {
        self.timer_ms
    }

    /// Drop all traffic and restart the timer.
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.timer_ms = 0;
    }

    /// Accumulate time and spawn when the delay has elapsed.
    ///
    /// Returns the new obstacle, if any.
    pub fn update(
        &mut self,
        elapsed_ms: u32,
        difficulty_speed: f32,
        rng: &mut SimpleRng,
    ) -> Option<Obstacle> {
        self.timer_ms = self.timer_ms.saturating_add(elapsed_ms);
        if self.timer_ms < self.rules.delay_ms {
            return None;
        }
        self.timer_ms = 0;
        Some(self.spawn(difficulty_speed, rng))
    }

    /// Spawn one obstacle in a random lane, ignoring the timer.
    pub fn spawn(&mut self, difficulty_speed: f32, rng: &mut SimpleRng) -> Obstacle {
        let lane = rng.next_range(self.lanes.len() as u32) as usize;
        let jitter = rng.next_range(self.rules.speed_jitter.saturating_add(1)) as f32;
        let obstacle = Obstacle {
            x: self.lanes.center(lane).unwrap_or_default(),
            y: self.rules.spawn_y,
            speed: difficulty_speed + jitter,
            width: self.rules.car_width,
            height: self.rules.car_height,
        };
        debug!(
            "spawn: lane={} speed={:.1} live={}",
            lane,
            obstacle.speed,
            self.obstacles.len() + 1
        );
        self.obstacles.push(obstacle);
        obstacle
    }

    /// Move every obstacle down by its own speed and drop the ones that left
    /// the road.
    pub fn advance_all(&mut self) {
        let bottom = self.rules.visible_bottom;
        self.obstacles.retain_mut(|o| {
            o.update();
            o.bounds().top() <= bottom
        });
    }

    /// Insert an obstacle directly (scripted scenarios and tests).
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}
