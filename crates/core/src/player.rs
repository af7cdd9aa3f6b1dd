//! Player controller - lane index plus a smoothed x position.
//!
//! Move commands only retarget; `tick` walks the car toward the target at a
//! constant speed and snaps once the remaining distance fits in one step, so a
//! lane change always lands exactly on the lane center.

use crate::collision::Rect;
use crate::lanes::LaneSet;
use crate::sprite::{Sprite, SpriteKind, SpriteView};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    lanes: LaneSet,
    lane_index: usize,
    x: f32,
    target_x: f32,
    y: f32,
    width: f32,
    height: f32,
    move_speed: f32,
}

impl Player {
    /// Place the player centered in `lane_index` with its bottom edge at
    /// `bottom`.
    ///
    /// `lane_index` is clamped to the lane set.
    pub fn new(
        lanes: LaneSet,
        lane_index: usize,
        bottom: f32,
        width: f32,
        height: f32,
        move_speed: f32,
    ) -> Self {
        let lane_index = lane_index.min(lanes.last_index());
        let x = lanes.center(lane_index).unwrap_or_default();
        Self {
            lanes,
            lane_index,
            x,
            target_x: x,
            y: bottom - height,
            width,
            height,
            move_speed,
        }
    }

    pub fn lane_index(&self) -> usize {
        self.lane_index
    }

    /// Current center x.
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn target_x(&self) -> f32 {
        self.target_x
    }

    /// Top edge (fixed for the whole run).
    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn is_aligned(&self) -> bool {
        self.x == self.target_x
    }

    /// Steer one lane left. Silently ignored in the leftmost lane.
    pub fn move_left(&mut self) -> bool {
        if self.lane_index == 0 {
            return false;
        }
        self.retarget(self.lane_index - 1)
    }

    /// Steer one lane right. Silently ignored in the rightmost lane.
    pub fn move_right(&mut self) -> bool {
        if self.lane_index >= self.lanes.last_index() {
            return false;
        }
        self.retarget(self.lane_index + 1)
    }

    fn retarget(&mut self, lane_index: usize) -> bool {
        let Some(center) = self.lanes.center(lane_index) else {
            return false;
        };
        self.lane_index = lane_index;
        self.target_x = center;
        true
    }

    /// Move toward the target lane by one step.
    pub fn tick(&mut self) {
        let dx = self.target_x - self.x;
        if dx.abs() <= self.move_speed {
            self.x = self.target_x;
        } else {
            self.x += self.move_speed * dx.signum();
        }
    }
}

impl Sprite for Player {
    fn update(&mut self) {
        self.tick();
    }

    fn bounds(&self) -> Rect {
        Rect::centered_x(self.x, self.y, self.width, self.height)
    }

    fn view(&self) -> SpriteView {
        SpriteView {
            kind: SpriteKind::Player,
            rect: self.bounds(),
        }
    }
}
